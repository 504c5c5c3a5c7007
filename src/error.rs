//! 错误类型
//!
//! 启动错误、存储错误以及界面操作的校验/选择错误

use std::io;

use thiserror::Error;

use crate::models::FormField;

/// 启动阶段的错误
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    InvalidLogLevel(String),

    #[error("logger error: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),

    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

pub type AppResult<T> = Result<T, AppError>;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 表单校验失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill up the {} entry before adding", .0.label())]
    EmptyField(FormField),

    #[error("The number that you have entered is invalid")]
    InvalidNumber,
}

/// 没有选中任何条目
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please select an entry from the address book to {action}")]
pub struct SelectionError {
    pub action: &'static str,
}

/// 界面操作失败的原因
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ActionError {
    /// 弹窗标题
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::EmptyField(_)) => "Please fill in the entries",
            Self::Validation(ValidationError::InvalidNumber) => "Invalid input",
            Self::Selection(_) => "Selection Error",
            Self::Store(_) => "Storage Error",
        }
    }
}
