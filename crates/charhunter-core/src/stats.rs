//! 扫描统计与结果
use std::path::PathBuf;

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_scanned: usize,
    pub chars_scanned: usize,
    /// 检测到的非 ASCII 字符总数，恒等于输出的记录条数
    pub detections: usize,
}

/// 一次扫描的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// 路径不存在或不是普通文件：已输出错误提示，未读取任何内容
    Missing(PathBuf),
    /// 完整扫描完毕
    Completed(ScanStats),
}
