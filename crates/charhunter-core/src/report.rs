//! 终端报告输出（ANSI 彩色）
use std::io::{self, Write};
use std::path::Path;

use crate::types::CharRecord;
use crate::unicode::literal;

/// ANSI 颜色转义码
pub(crate) mod colors {
    pub const WHITE: &str = "\x1b[97m";
    pub const CYAN: &str = "\x1b[96m";
    pub const MAGENTA: &str = "\x1b[95m";
    pub const VIOLET: &str = "\x1b[38;5;135m";
    pub const RED: &str = "\x1b[91m";
    pub const RESET: &str = "\x1b[0m";
}

use colors::*;

/// 扫描开始提示（其后空一行）
pub(crate) fn write_header(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{WHITE}Scanning file: {RED}{}{RESET}\n", path.display())
}

/// 单条检测记录：位置、字面表示、码点与名称
pub(crate) fn write_record(out: &mut dyn Write, rec: &CharRecord) -> io::Result<()> {
    writeln!(
        out,
        "{WHITE}Line {MAGENTA}{}{WHITE}, Col {CYAN}{}{WHITE}: {} -> {VIOLET}{} ({}){RESET}",
        rec.line,
        rec.column,
        literal(rec.ch),
        rec.info.code_point,
        rec.info.name,
    )
}

/// 汇总行：未发现时给出提示，否则输出总数
pub(crate) fn write_summary(out: &mut dyn Write, count: usize) -> io::Result<()> {
    if count == 0 {
        writeln!(out, "\n{WHITE}No Unicode characters found.{RESET}")
    } else {
        writeln!(out, "\n{WHITE}Total Unicode characters found: {MAGENTA}{count}{RESET}")
    }
}

/// 文件不存在的错误提示
pub(crate) fn write_missing(out: &mut dyn Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{RED}Error: File {WHITE}'{}'{RED} does not exist.{RESET}", path.display())
}
