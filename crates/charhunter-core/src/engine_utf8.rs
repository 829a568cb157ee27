//! UTF-8 文本读取与逐字符检测引擎
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::Chars;

use crate::error::ScanError;
use crate::lines::{split_lines, Lines};
use crate::stats::ScanStats;
use crate::types::CharRecord;
use crate::unicode::{is_non_ascii, resolve_char_info};

/// 整读文件并按 UTF-8 解码
/// - 文件句柄在函数返回前释放（包括解码失败的路径）
/// - 读取失败与解码失败均不在此处理，直接返回给调用方
pub(crate) fn read_text(path: &Path) -> Result<String, ScanError> {
    let io_err = |source| ScanError::Io { path: path.to_path_buf(), source };
    let bytes = {
        let file = File::open(path).map_err(io_err)?;
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).map_err(io_err)?;
        buf
    };
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "file read");
    String::from_utf8(bytes).map_err(|source| ScanError::Decode { path: path.to_path_buf(), source })
}

/// 按文档顺序惰性产出文本中所有非 ASCII 字符的检测记录
pub(crate) fn detect(text: &str) -> Detections<'_> {
    Detections {
        lines: split_lines(text),
        current: None,
        line_no: 0,
        column: 0,
        stats: ScanStats::default(),
    }
}

/// [`detect`] 返回的迭代器；同时累计扫描统计
#[derive(Debug, Clone)]
pub(crate) struct Detections<'a> {
    lines: Lines<'a>,
    current: Option<Chars<'a>>,
    line_no: usize,
    column: usize,
    stats: ScanStats,
}

impl Detections<'_> {
    /// 截至目前的统计信息；迭代结束后即为最终结果
    pub(crate) fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

impl Iterator for Detections<'_> {
    type Item = CharRecord;

    fn next(&mut self) -> Option<CharRecord> {
        loop {
            if self.current.is_none() {
                let line = self.lines.next()?;
                self.line_no += 1;
                self.column = 0;
                self.stats.lines_scanned += 1;
                self.current = Some(line.chars());
            }

            // 列号按行内原始字符序列计数（包含保留的行尾换行符）
            match self.current.as_mut().and_then(Iterator::next) {
                Some(ch) => {
                    self.column += 1;
                    self.stats.chars_scanned += 1;
                    if is_non_ascii(ch) {
                        self.stats.detections += 1;
                        return Some(CharRecord {
                            line: self.line_no,
                            column: self.column,
                            ch,
                            code_point: ch as u32,
                            info: resolve_char_info(ch),
                        });
                    }
                }
                None => self.current = None,
            }
        }
    }
}
