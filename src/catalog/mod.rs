//! Catalog data and loading

pub mod models;
mod poster;
pub mod store;

pub use models::{CatalogEntry, Category};
pub use poster::normalize_poster_url;
pub use store::CatalogStore;
