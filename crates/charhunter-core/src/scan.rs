//! 扫描主流程
use std::io::Write;
use std::path::Path;

use crate::engine_utf8::{detect, read_text};
use crate::error::ScanError;
use crate::report::{write_header, write_missing, write_record, write_summary};
use crate::stats::{ScanOutcome, ScanStats};

/// 扫描单个文件并将报告流式写入 `out`
/// - 路径不是已存在的普通文件：写出错误提示后返回 `Missing`，不读取任何内容
/// - 读取/解码失败：直接返回错误（此时尚未写出任何报告内容）
/// - 每检测到一个非 ASCII 字符立即写出一行，最后写出汇总
pub fn scan_and_write(path: &Path, out: &mut dyn Write) -> Result<ScanOutcome, ScanError> {
    if !path.is_file() {
        write_missing(out, path)?;
        return Ok(ScanOutcome::Missing(path.to_path_buf()));
    }

    let text = read_text(path)?;

    write_header(out, path)?;
    let mut detections = detect(&text);
    for rec in detections.by_ref() {
        write_record(out, &rec)?;
    }
    let stats: ScanStats = detections.stats().clone();
    write_summary(out, stats.detections)?;

    tracing::debug!(
        lines = stats.lines_scanned,
        chars = stats.chars_scanned,
        detections = stats.detections,
        "scan complete"
    );
    Ok(ScanOutcome::Completed(stats))
}
