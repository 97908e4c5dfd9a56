mod config;
#[macro_use]
mod ui;
mod app;

use anyhow::Result;
use tracing_subscriber::prelude::*;

/// 日志写入缓存目录下的文件；终端由 UI 独占，不输出到 stdout
fn setup_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = config::paths::log_dir()?;
    let file_appender = tracing_appender::rolling::never(log_dir, config::paths::LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("aspect_tui=info,aspect_core=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let _guard = setup_logging()?;

    let mut app = app::App::new()?;
    let result = app.run().await;
    if let Err(e) = &result {
        tracing::error!("exited with error: {e:#}");
    }
    result
}
