mod code;
mod formatter;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;

use thiserror::Error;

/// VFM統一エラー型
#[derive(Debug, Error)]
pub enum VfmError {
    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("Folder already exists: {0}")]
    FolderExists(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Stored '{key}' collection is corrupted: {source}")]
    CorruptStore {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, VfmError>;

impl VfmError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            VfmError::FolderNotFound(_) => ErrorCode::Fld001,
            VfmError::FolderExists(_) => ErrorCode::Fld002,
            VfmError::InvalidInput(_) => ErrorCode::Val001,
            VfmError::CorruptStore { .. } => ErrorCode::Sto001,
            VfmError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
            VfmError::Io(_) => ErrorCode::Io001,
            VfmError::Json(_) => ErrorCode::Int001,
            VfmError::Config(_) => ErrorCode::Cfg001,
        }
    }
}
