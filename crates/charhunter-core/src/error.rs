//! 扫描错误类型
use std::path::PathBuf;
use thiserror::Error;

/// 扫描过程中的致命错误（文件不存在不属于此类，见 `ScanOutcome::Missing`）
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}
