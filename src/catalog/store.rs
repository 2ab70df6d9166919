//! Immutable per-category catalog storage

use anyhow::{Context, Result};
use futures::future::try_join_all;
use serde_json::{Map, Value};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info, warn};

use super::models::{CatalogEntry, Category, RawEntry};
use super::poster::normalize_poster_url;
use crate::error::CatalogError;
use crate::navigation::is_navigation_token;

/// Every category's entries, in display order.
///
/// Built once at startup and never mutated afterwards; share it behind an
/// `Arc`.
#[derive(Debug, Default)]
pub struct CatalogStore {
    categories: HashMap<Category, Vec<CatalogEntry>>,
}

impl CatalogStore {
    /// Build a store from in-memory entry lists.
    ///
    /// Fails if an entry has a blank title or if two entries of one category
    /// would render the same button label. Categories not supplied are empty.
    pub fn from_categories<I>(categories: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (Category, Vec<CatalogEntry>)>,
    {
        let mut store = Self::default();

        for (category, entries) in categories {
            let mut labels = HashSet::with_capacity(entries.len());

            for entry in &entries {
                if entry.title.trim().is_empty() {
                    return Err(CatalogError::MissingTitle { category });
                }

                let label = entry.label();
                if is_navigation_token(&label) {
                    warn!(
                        "{}: {:?} collides with a navigation button and can only be reached by search",
                        category, label
                    );
                }
                if !labels.insert(label.clone()) {
                    return Err(CatalogError::DuplicateLabel { category, label });
                }
            }

            debug!("{}: {} entries", category, entries.len());
            store.categories.insert(category, entries);
        }

        Ok(store)
    }

    /// Load every category's JSON file from `dir`.
    ///
    /// A missing file yields an empty category. Unreadable or malformed files
    /// abort the load.
    pub async fn load(dir: &Path) -> Result<Self> {
        let loads = Category::ALL.into_iter().map(|category| async move {
            let entries = Self::load_category(dir, category).await?;
            Ok::<_, anyhow::Error>((category, entries))
        });

        let categories = try_join_all(loads).await?;
        let store = Self::from_categories(categories)
            .with_context(|| format!("Invalid catalog in {:?}", dir))?;

        info!(
            "Loaded {} catalog entries from {}",
            store.total_entries(),
            dir.display()
        );
        Ok(store)
    }

    async fn load_category(dir: &Path, category: Category) -> Result<Vec<CatalogEntry>> {
        let path = dir.join(category.data_file());

        let exists = fs::try_exists(&path)
            .await
            .with_context(|| format!("Failed to check catalog file {:?}", path))?;
        if !exists {
            warn!("No catalog file for {} at {}", category, path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read catalog file {:?}", path))?;

        let entries = parse_category(category, &contents)
            .with_context(|| format!("Failed to parse catalog file {:?}", path))?;

        Ok(entries)
    }

    /// Entries of a category in display order
    pub fn entries(&self, category: Category) -> &[CatalogEntry] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of entries in a category
    pub fn len(&self, category: Category) -> usize {
        self.entries(category).len()
    }

    /// Number of entries across every category
    pub fn total_entries(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }
}

/// Parse one catalog file: a JSON object keyed by title, in display order
pub fn parse_category(category: Category, contents: &str) -> Result<Vec<CatalogEntry>> {
    let object: Map<String, Value> =
        serde_json::from_str(contents).context("Catalog file is not a JSON object")?;

    let mut entries = Vec::with_capacity(object.len());
    for (title, value) in object {
        let raw: RawEntry = serde_json::from_value(value).map_err(|source| {
            CatalogError::Malformed {
                category,
                title: title.clone(),
                source,
            }
        })?;
        entries.push(build_entry(category, title, raw));
    }

    Ok(entries)
}

fn build_entry(category: Category, title: String, raw: RawEntry) -> CatalogEntry {
    CatalogEntry {
        title,
        emoji: non_blank(raw.emoji),
        poster: raw.poster.as_deref().and_then(normalize_poster_url),
        links: raw.links,
        audio_track: non_blank(raw.audio).unwrap_or_else(|| category.default_audio().to_string()),
        rating: non_blank(raw.imdb),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
