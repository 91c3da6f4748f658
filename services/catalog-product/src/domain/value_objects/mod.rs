//! 值对象模块

mod ids;
mod lookup;
mod slug;

pub use ids::ProductId;
pub use lookup::ProductLookup;
pub use slug::normalize_slug;
