mod event;
mod render;

const UI_TICK_MS: u64 = 1000;

use std::path::PathBuf;

use anyhow::Result;
use aspect_core::{DimensionState, Deriver, Field};
use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::config::{paths, settings::Settings};
use crate::ui::log_view::{LogLevel, LogStore};

/// 异步消息，从后台任务发送到主循环
pub enum AppMessage {
    /// 终端事件（由持久后台线程读取）
    TermEvent(Event),
    /// 定时 tick，驱动头部时钟刷新
    Tick,
}

pub struct App {
    pub running: bool,
    pub settings: Settings,
    /// 配置文件路径，切换语言时写回
    settings_path: PathBuf,
    /// 四个尺寸输入框的当前值
    pub dims: DimensionState,
    pub focused: Field,
    /// 派生数据（比例、预览、布局表），按源尺寸缓存
    pub deriver: Deriver,
    pub show_help: bool,
    pub help_scroll: u16,
    pub show_logs: bool,
    pub logs: LogStore,
    pub msg_tx: mpsc::UnboundedSender<AppMessage>,
    msg_rx: mpsc::UnboundedReceiver<AppMessage>,
}

impl App {
    pub fn new() -> Result<Self> {
        let settings_path = paths::config_file()?;
        let settings = Settings::load_from(&settings_path)?;
        Ok(Self::with_settings(settings, settings_path))
    }

    pub fn with_settings(mut settings: Settings, settings_path: PathBuf) -> Self {
        let mut logs = LogStore::new();
        for note in settings.sanitize() {
            logs.push(LogLevel::Warn, note);
        }

        crate::ui::i18n::set_lang(settings.display.language);

        let deriver = Deriver::new(settings.layout.clone(), settings.preview.max_size as f64);
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        tracing::info!(
            widths = ?settings.layout.layout_widths,
            count = settings.layout.layout_count,
            preview_max = settings.preview.max_size,
            "app initialised"
        );

        Self {
            running: true,
            settings,
            settings_path,
            dims: DimensionState::default(),
            focused: Field::SourceWidth,
            deriver,
            show_help: false,
            help_scroll: 0,
            show_logs: false,
            logs,
            msg_tx,
            msg_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        let result = self.main_loop(&mut terminal).await;
        ratatui::restore();
        result
    }

    async fn main_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<()> {
        // 启动持久的事件读取线程，避免 select! + spawn_blocking 丢事件
        let event_tx = self.msg_tx.clone();
        std::thread::spawn(move || {
            while let Ok(ev) = crossterm::event::read() {
                if event_tx.send(AppMessage::TermEvent(ev)).is_err() {
                    break;
                }
            }
        });

        let tick_tx = self.msg_tx.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_millis(UI_TICK_MS));
            loop {
                interval.tick().await;
                if tick_tx.send(AppMessage::Tick).is_err() {
                    break;
                }
            }
        });

        while self.running {
            terminal.draw(|f| self.render(f))?;

            // 等待至少一条消息
            if let Some(msg) = self.msg_rx.recv().await {
                self.handle_message(msg);
            }
            // 批量处理所有已积压的消息，避免每条消息都触发一次 draw
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.handle_message(msg);
            }
        }
        Ok(())
    }
}
