//! 非 ASCII 字符扫描库
//!
//! 设计要点：
//! - 整读文件并按 UTF-8 解码，解码失败直接作为致命错误返回。
//! - 按通用换行规则切分行（保留行尾换行符），逐字符比较码点与 ASCII 上限。
//! - 每个检测结果立即写出，末尾输出总数；同一文件多次扫描输出完全一致。

mod error;
mod lines;
mod stats;
mod types;
mod unicode;
mod engine_utf8;
mod report;
mod scan;

// 对外仅暴露扫描入口与结果类型
pub use error::ScanError;
pub use stats::{ScanOutcome, ScanStats};
pub use types::CharRecord;
pub use unicode::CharInfo;
pub use scan::scan_and_write;
