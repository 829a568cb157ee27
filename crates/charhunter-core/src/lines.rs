//! 行切分（通用换行：`\n`、`\r\n`、单独的 `\r`），保留行尾换行符

/// 按行切分文本，每行保留其行尾换行符；末行无换行符时同样产出
pub(crate) fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// [`split_lines`] 返回的迭代器
#[derive(Debug, Clone)]
pub(crate) struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let bytes = self.rest.as_bytes();
        let end = match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\r' && bytes.get(i + 1) == Some(&b'\n') => i + 2,
            Some(i) => i + 1,
            None => bytes.len(),
        };
        // 换行符均为单字节 ASCII，end 必落在字符边界上
        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}
