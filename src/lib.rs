//! cinepulse - paged catalog menus and fuzzy title lookup for a media chat bot

pub mod bot;
pub mod caption;
pub mod catalog;
pub mod config;
pub mod error;
pub mod navigation;
pub mod search;

pub use bot::{CatalogBot, EntryDetail, Notice, Reply};
pub use catalog::{CatalogEntry, CatalogStore, Category};
pub use config::BotConfig;
