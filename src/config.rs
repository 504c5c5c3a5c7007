//! 配置文件
//!
//! 数据目录下可选的 `config.toml`，缺失时使用默认值

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppResult;

pub const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_DATABASE_FILE: &str = "contacts.db";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 相对路径相对于数据目录解析
    pub database_path: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_FILE),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// 数据库文件的绝对位置
    pub fn resolve_database_path(&self, data_dir: &Path) -> PathBuf {
        if self.database_path.is_absolute() {
            self.database_path.clone()
        } else {
            data_dir.join(&self.database_path)
        }
    }
}

/// 获取数据目录路径 (~/.local/share/addressbook/)
pub fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "cannot locate user data directory"))?
        .join("addressbook");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

/// 从 TOML 文件加载配置
pub fn load_config(path: &Path) -> AppResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
