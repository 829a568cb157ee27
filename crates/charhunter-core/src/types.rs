//! 公共类型（对外暴露）
use crate::unicode::CharInfo;

/// 单个非 ASCII 字符的检测记录（行列均从 1 开始）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRecord {
    pub line: usize,
    pub column: usize,
    pub ch: char,
    pub code_point: u32,
    pub info: CharInfo,
}
