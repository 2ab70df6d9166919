//! Category pagination into a two-column keyboard

use serde::{Deserialize, Serialize};

use super::{BACK, MAIN_MENU, NEXT};
use crate::catalog::{CatalogStore, Category};
use crate::error::NavigationError;

/// Entries shown per page
pub const PAGE_SIZE: usize = 30;
/// Labels per keyboard row
pub const ROW_WIDTH: usize = 2;

/// How the Back/Next row is drawn for a category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavStyle {
    /// Always show both Back and Next
    #[default]
    Full,
    /// Show only the buttons that lead somewhere; no row at all for a single page
    Adaptive,
}

impl NavStyle {
    /// Built-in style for a category
    pub fn default_for(category: Category) -> Self {
        match category {
            Category::Adult => NavStyle::Adaptive,
            _ => NavStyle::Full,
        }
    }
}

/// One rendered page of a category menu
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub category: Category,
    pub heading: &'static str,
    /// 1-indexed page number
    pub number: usize,
    pub total_pages: usize,
    /// Entry labels, at most `ROW_WIDTH` per row
    pub rows: Vec<Vec<String>>,
    /// Navigation rows appended below the entries
    pub controls: Vec<Vec<String>>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Page {
    /// Entry labels in display order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }

    /// Full keyboard: entry rows followed by the navigation rows
    pub fn keyboard(&self) -> Vec<Vec<String>> {
        self.rows.iter().chain(&self.controls).cloned().collect()
    }
}

/// Number of pages needed for `total_entries`; an empty category still has one
pub fn total_pages(total_entries: usize) -> usize {
    total_entries.max(1).div_ceil(PAGE_SIZE)
}

/// Render page `page` of `category`.
///
/// Fails with [`NavigationError::OutOfRange`] for pages outside
/// `1..=total_pages`.
pub fn paginate(
    store: &CatalogStore,
    category: Category,
    page: usize,
    style: NavStyle,
) -> Result<Page, NavigationError> {
    let entries = store.entries(category);
    let total_pages = total_pages(entries.len());

    if page < 1 || page > total_pages {
        return Err(NavigationError::OutOfRange { page, total_pages });
    }

    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(entries.len());

    let rows: Vec<Vec<String>> = entries[start..end]
        .chunks(ROW_WIDTH)
        .map(|chunk| chunk.iter().map(|entry| entry.label()).collect())
        .collect();

    let has_prev = page > 1;
    let has_next = page < total_pages;

    let mut controls = Vec::with_capacity(2);
    match style {
        NavStyle::Full => controls.push(vec![BACK.to_string(), NEXT.to_string()]),
        NavStyle::Adaptive => {
            let mut nav = Vec::with_capacity(2);
            if has_prev {
                nav.push(BACK.to_string());
            }
            if has_next {
                nav.push(NEXT.to_string());
            }
            if !nav.is_empty() {
                controls.push(nav);
            }
        }
    }
    controls.push(vec![MAIN_MENU.to_string()]);

    Ok(Page {
        category,
        heading: category.heading(),
        number: page,
        total_pages,
        rows,
        controls,
        has_prev,
        has_next,
    })
}
