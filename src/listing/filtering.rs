//! Category and search predicates.
//!
//! An item is visible when it passes both the category filter and the text
//! search. The search compares a case-folded term against case-folded copies
//! of the item's title, description and category, which are computed once
//! when the items are set.

use super::types::{Category, Item};

/// Case-folded searchable fields of one item.
#[derive(Debug, Clone)]
pub(super) struct SearchKey {
    title: String,
    description: String,
    category: String,
}

impl SearchKey {
    pub(super) fn new<I: Item>(item: &I) -> Self {
        Self {
            title: fold(item.title()),
            description: fold(item.description()),
            category: fold(item.category()),
        }
    }

    /// `term` must already be folded. The empty term matches everything.
    pub(super) fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.title.contains(term)
            || self.description.contains(term)
            || self.category.contains(term)
    }
}

/// Case folding used on both sides of the search.
pub(super) fn fold(s: &str) -> String {
    s.to_lowercase()
}

/// Indices of the items passing both predicates, in original order.
pub(super) fn visible_indices<I: Item>(
    items: &[I],
    keys: &[SearchKey],
    category: &Category,
    term: &str,
) -> Vec<usize> {
    items
        .iter()
        .zip(keys)
        .enumerate()
        .filter(|(_, (item, key))| category.matches(item.category()) && key.matches(term))
        .map(|(index, _)| index)
        .collect()
}
