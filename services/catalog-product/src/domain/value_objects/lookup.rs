//! 商品查找键

use std::fmt;

use catalog_common::is_canonical_uuid;

use super::ProductId;

/// 商品查找方式
///
/// 只有 36 字符的标准连字符 UUID 才按主键查找，其余一律按 slug/标题查找
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    /// 按主键精确查找
    ById(ProductId),
    /// 按 slug 或标题查找（不区分大小写）
    BySearchTerm(String),
}

impl ProductLookup {
    pub fn parse(term: &str) -> Self {
        if is_canonical_uuid(term) {
            if let Ok(id) = term.parse() {
                return Self::ById(id);
            }
        }
        Self::BySearchTerm(term.to_string())
    }
}

impl fmt::Display for ProductLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ById(id) => write!(f, "{}", id),
            Self::BySearchTerm(term) => write!(f, "{}", term),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_uuid_is_id() {
        let lookup = ProductLookup::parse("67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert!(matches!(lookup, ProductLookup::ById(_)));
    }

    #[test]
    fn test_slug_is_search_term() {
        assert_eq!(
            ProductLookup::parse("red_shoe"),
            ProductLookup::BySearchTerm("red_shoe".to_string())
        );
    }

    #[test]
    fn test_non_canonical_uuid_forms_are_search_terms() {
        // simple 形式和带花括号形式虽然能被解析为 UUID，但不按主键查找
        for term in [
            "67e5504410b1426f9247bb680e5fe0c8",
            "{67e55044-10b1-426f-9247-bb680e5fe0c8}",
        ] {
            assert!(matches!(
                ProductLookup::parse(term),
                ProductLookup::BySearchTerm(_)
            ));
        }
    }

    #[test]
    fn test_36_char_slug_is_search_term() {
        let slug = "a_very_long_product_slug_of_36_chars";
        assert_eq!(slug.len(), 36);
        assert!(matches!(
            ProductLookup::parse(slug),
            ProductLookup::BySearchTerm(_)
        ));
    }

    #[test]
    fn test_display_keeps_term() {
        assert_eq!(ProductLookup::parse("Red Shoe").to_string(), "Red Shoe");
    }
}
