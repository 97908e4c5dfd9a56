#[macro_use]
pub mod i18n;

pub mod constants;
pub mod form;
pub mod help;
pub mod layout_table;
pub mod log_view;
pub mod preview;
pub mod theme;
pub mod util;
