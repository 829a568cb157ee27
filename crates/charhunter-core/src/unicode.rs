//! 字符分类与 Unicode 信息查询

/// ASCII 范围上限（含）；码点大于该值即视为 Unicode 字符
pub(crate) const ASCII_MAX: u32 = 127;

/// 名称查询失败时的占位名称
pub(crate) const UNKNOWN_NAME: &str = "UNKNOWN CHARACTER";

/// 单个字符的码点标签与官方名称
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharInfo {
    /// 形如 `U+00E9` 的码点标签（至少 4 位十六进制，大写）
    pub code_point: String,
    /// 官方 Unicode 名称；无名称时为 `UNKNOWN CHARACTER`
    pub name: String,
}

/// 是否为非 ASCII 字符
pub(crate) fn is_non_ascii(c: char) -> bool {
    c as u32 > ASCII_MAX
}

/// 查询字符的码点标签与官方名称（不会失败：查不到名称时使用占位名称）
pub(crate) fn resolve_char_info(c: char) -> CharInfo {
    let code_point = format!("U+{:04X}", c as u32);
    let name = match unicode_names2::name(c) {
        Some(n) => n.to_string(),
        None => UNKNOWN_NAME.to_string(),
    };
    CharInfo { code_point, name }
}

/// 字符的字面表示：单引号包裹，不可打印字符按转义形式输出
pub(crate) fn literal(c: char) -> String {
    format!("{:?}", c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_boundary() {
        assert!(!is_non_ascii('a'));
        assert!(!is_non_ascii('\u{7F}'));
        assert!(is_non_ascii('\u{80}'));
        assert!(is_non_ascii('é'));
    }

    #[test]
    fn resolves_latin_letter() {
        let info = resolve_char_info('é');
        assert_eq!(info.code_point, "U+00E9");
        assert_eq!(info.name, "LATIN SMALL LETTER E WITH ACUTE");
    }

    #[test]
    fn resolves_emoji_with_five_hex_digits() {
        let info = resolve_char_info('😀');
        assert_eq!(info.code_point, "U+1F600");
        assert_eq!(info.name, "GRINNING FACE");
    }

    #[test]
    fn control_char_falls_back_to_unknown() {
        // C1 控制字符在 UnicodeData 中没有正式名称
        let info = resolve_char_info('\u{85}');
        assert_eq!(info.code_point, "U+0085");
        assert_eq!(info.name, UNKNOWN_NAME);
    }

    #[test]
    fn literal_escapes_invisible_chars() {
        assert_eq!(literal('é'), "'é'");
        assert_eq!(literal('\u{200B}'), "'\\u{200b}'");
    }
}
