use std::sync::atomic::{AtomicU8, Ordering};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    En,
    Zh,
}

impl Default for Lang {
    fn default() -> Self {
        Self::detect_system()
    }
}

impl Lang {
    /// 从系统环境变量检测语言，首次启动时使用
    fn detect_system() -> Self {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(val) = std::env::var(var) {
                if val.starts_with("zh") {
                    return Lang::Zh;
                }
            }
        }
        Lang::En
    }

    pub fn next(self) -> Self {
        match self {
            Lang::En => Lang::Zh,
            Lang::Zh => Lang::En,
        }
    }
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0);

pub fn set_lang(lang: Lang) {
    CURRENT_LANG.store(lang as u8, Ordering::Relaxed);
}

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Zh,
        _ => Lang::En,
    }
}

/// 当前语言是进程级全局状态，依赖界面文案的测试需串行
#[cfg(test)]
pub(crate) fn lang_guard() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

macro_rules! t {
    ($key:expr) => {
        $crate::ui::i18n::tr($key)
    };
}

/// 布局预设名称（n 栏）
pub fn columns_label(columns: usize) -> String {
    match lang() {
        Lang::En => aspect_core::LayoutConfig::preset_name(columns),
        Lang::Zh => format!("{columns} 栏"),
    }
}

/// # Safety
/// All keys used with `t!()` must have entries in the translation tables.
/// Unknown keys will return `"???"`.
pub fn tr(key: &str) -> &'static str {
    match lang() {
        Lang::En => tr_en(key),
        Lang::Zh => tr_zh(key),
    }
}

fn tr_en(key: &str) -> &'static str {
    match key {
        // app
        "app.title" => "ASPECT RATIO",
        "app.hint" => "Tab next field  \u{00b7}  Ctrl+R reset  \u{00b7}  F1 help  \u{00b7}  Esc quit",

        // form
        "form.source" => "Source Dimensions",
        "form.target" => "Target Dimensions",
        "form.source_width" => "Source Width",
        "form.source_height" => "Source Height",
        "form.target_width" => "Target Width",
        "form.target_height" => "Target Height",

        // preview
        "preview.title" => "Ratio Preview",

        // layouts
        "layouts.title" => "Layouts",
        "layouts.layout" => "Layout",
        "layouts.empty" => "Enter a source width and height",

        // help
        "help.title" => "Key Bindings",
        "help.close" => "F1 / Esc to close",
        "help.section.edit" => "Editing",
        "help.section.global" => "Global",
        "help.digits" => "Type into focused field",
        "help.backspace" => "Delete last digit",
        "help.delete" => "Clear field",
        "help.next" => "Next field",
        "help.prev" => "Previous field",
        "help.reset" => "Restore 1920\u{00d7}1080 / 1440\u{00d7}810",
        "help.help" => "Toggle help",
        "help.logs" => "Toggle logs",
        "help.language" => "Switch language",
        "help.quit" => "Quit",

        // logs
        "logs.title" => "Logs",
        "logs.empty" => "No logs yet",
        "logs.close" => "Up/Down scroll  \u{00b7}  F2 / Esc close",

        _ => "???",
    }
}

fn tr_zh(key: &str) -> &'static str {
    match key {
        // app
        "app.title" => "宽高比",
        "app.hint" => "Tab 下一项  \u{00b7}  Ctrl+R 重置  \u{00b7}  F1 帮助  \u{00b7}  Esc 退出",

        // form
        "form.source" => "源尺寸",
        "form.target" => "目标尺寸",
        "form.source_width" => "源宽度",
        "form.source_height" => "源高度",
        "form.target_width" => "目标宽度",
        "form.target_height" => "目标高度",

        // preview
        "preview.title" => "比例预览",

        // layouts
        "layouts.title" => "布局",
        "layouts.layout" => "布局",
        "layouts.empty" => "请输入源宽度和高度",

        // help
        "help.title" => "快捷键",
        "help.close" => "F1 / Esc 关闭",
        "help.section.edit" => "编辑",
        "help.section.global" => "全局",
        "help.digits" => "输入到当前输入框",
        "help.backspace" => "删除末位数字",
        "help.delete" => "清空输入框",
        "help.next" => "下一项",
        "help.prev" => "上一项",
        "help.reset" => "恢复 1920\u{00d7}1080 / 1440\u{00d7}810",
        "help.help" => "显示/隐藏帮助",
        "help.logs" => "显示/隐藏日志",
        "help.language" => "切换语言",
        "help.quit" => "退出",

        // logs
        "logs.title" => "日志",
        "logs.empty" => "暂无日志",
        "logs.close" => "上/下 滚动  \u{00b7}  F2 / Esc 关闭",

        _ => tr_en(key),
    }
}
