pub const HELP_PANEL_WIDTH: u16 = 54;
pub const LOG_PANEL_WIDTH: u16 = 70;
pub const LOG_PANEL_HEIGHT: u16 = 20;

pub const HEADER_HEIGHT: u16 = 1;
pub const HINT_HEIGHT: u16 = 1;
/// 表单 + 预览区高度
pub const TOP_HEIGHT: u16 = 15;
pub const FORM_WIDTH: u16 = 48;
pub const INPUT_WIDTH: u16 = 20;
pub const LAYOUT_NAME_WIDTH: u16 = 12;
