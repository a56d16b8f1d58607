//! Category Lookup
//!
//! Resolves a label's category reference against the locally cached list.

use crate::models::Category;

/// Shown when a label has no category or its category is not cached
pub const UNKNOWN_CATEGORY: &str = "-";

pub fn category_name(categories: &[Category], category_id: Option<u32>) -> &str {
    category_id
        .and_then(|id| categories.iter().find(|category| category.id == id))
        .map(|category| category.name.as_str())
        .unwrap_or(UNKNOWN_CATEGORY)
}
