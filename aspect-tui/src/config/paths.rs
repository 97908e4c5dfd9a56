use std::path::PathBuf;

use anyhow::{Context, Result};

const APP_DIR: &str = "aspect-tui";

pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("无法获取配置目录")?
        .join(APP_DIR);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("无法创建目录 {}", dir.display()))?;
    Ok(dir)
}

pub fn log_dir() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .context("无法获取缓存目录")?
        .join(APP_DIR);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("无法创建目录 {}", dir.display()))?;
    Ok(dir)
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub const LOG_FILE_NAME: &str = "aspect-tui.log";
