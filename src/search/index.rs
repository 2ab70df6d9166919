//! Cross-category title index for free-text lookup

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::similarity::{ratio, ratio_upper_bound};
use crate::catalog::{CatalogEntry, CatalogStore, Category};

/// Minimum similarity for a fuzzy match to be accepted
pub const SIMILARITY_FLOOR: f64 = 0.3;

#[derive(Debug, Clone)]
struct IndexedTitle {
    title: String,
    char_len: usize,
    category: Category,
    /// Position within the category's entry list
    position: usize,
}

/// Best fuzzy match for a query
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub title: &'a str,
    pub category: Category,
    pub entry: &'a CatalogEntry,
    pub score: f64,
}

/// Flattened title → entry mapping over every category.
///
/// Categories are folded in [`Category::SEARCH_ORDER`]. When the same title
/// exists in several categories the later one replaces the earlier one but
/// keeps the earlier one's place in iteration order.
#[derive(Debug)]
pub struct SearchIndex {
    store: Arc<CatalogStore>,
    titles: Vec<IndexedTitle>,
}

impl SearchIndex {
    /// Build the index from a loaded store
    pub fn build(store: Arc<CatalogStore>) -> Self {
        let mut titles: Vec<IndexedTitle> = Vec::with_capacity(store.total_entries());
        let mut slots: HashMap<String, usize> = HashMap::with_capacity(store.total_entries());

        for category in Category::SEARCH_ORDER {
            for (position, entry) in store.entries(category).iter().enumerate() {
                let indexed = IndexedTitle {
                    title: entry.title.clone(),
                    char_len: entry.title.chars().count(),
                    category,
                    position,
                };

                match slots.get(&entry.title) {
                    Some(&slot) => {
                        debug!(
                            "Search index: {:?} from {} replaces the one from {}",
                            entry.title, category, titles[slot].category
                        );
                        titles[slot] = indexed;
                    }
                    None => {
                        slots.insert(entry.title.clone(), titles.len());
                        titles.push(indexed);
                    }
                }
            }
        }

        debug!("Search index built with {} titles", titles.len());
        Self { store, titles }
    }

    /// Number of distinct titles
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Find the single closest title to `query`.
    ///
    /// Returns `None` for a blank query or when no title reaches
    /// [`SIMILARITY_FLOOR`]. Equal scores go to the title seen first.
    pub fn search(&self, query: &str) -> Option<SearchHit<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let query_len = query.chars().count();
        let mut best: Option<(&IndexedTitle, f64)> = None;

        for indexed in &self.titles {
            let bound = ratio_upper_bound(indexed.char_len, query_len);
            let beaten = best.is_some_and(|(_, score)| bound <= score);
            if bound < SIMILARITY_FLOOR || beaten {
                continue;
            }

            let score = ratio(&indexed.title, query);
            if score < SIMILARITY_FLOOR {
                continue;
            }
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((indexed, score));
            }
        }

        let (indexed, score) = best?;
        let entry = self.store.entries(indexed.category).get(indexed.position)?;

        Some(SearchHit {
            title: &entry.title,
            category: indexed.category,
            entry,
            score,
        })
    }
}
