//! Fuzzy title search across all categories

pub mod index;
pub mod similarity;

pub use index::{SearchHit, SearchIndex, SIMILARITY_FLOOR};
