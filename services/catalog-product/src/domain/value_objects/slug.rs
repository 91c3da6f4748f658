//! Slug 规范化

/// 规范化 slug
///
/// 转小写，空格替换为 `_`，再去掉 `[a-z0-9_]` 以外的字符。
/// 结果可能为空串，例如全部由标点组成的标题。
pub fn normalize_slug(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '_' } else { c })
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}
