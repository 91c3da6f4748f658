//! 通用工具函数

use uuid::Uuid;

/// 生成新的 UUID v7（时间有序）
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

/// 是否为规范的 36 字符带连字符 UUID 文本
///
/// `Uuid::parse_str` 也接受 32 位简写、花括号和 urn 形式，这里只认标准形式。
pub fn is_canonical_uuid(s: &str) -> bool {
    s.len() == 36 && Uuid::try_parse(s).is_ok()
}
