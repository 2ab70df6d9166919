//! Map clicked button text back to an entry or a navigation step

use super::pager::total_pages;
use super::session::SessionCursor;
use super::{BACK, MAIN_MENU, NEXT};
use crate::catalog::{CatalogEntry, CatalogStore, Category};
use crate::error::NavigationError;

/// Outcome of resolving one piece of user text
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    /// Render this page (Back/Next)
    ShowPage { category: Category, page: usize },
    /// Leave the category and show the top-level menu
    MainMenu,
    /// The text is an entry label of the active category
    Entry {
        category: Category,
        entry: &'a CatalogEntry,
    },
    /// Back/Next that can't move any further
    Blocked(NavigationError),
    /// Back/Next with no active category
    NoActiveCategory,
    /// Nothing in the active category matches
    Unmatched,
}

/// Resolves clicks against the catalog, given the user's cursor
#[derive(Debug, Clone, Copy)]
pub struct SelectionResolver<'a> {
    store: &'a CatalogStore,
}

impl<'a> SelectionResolver<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self { store }
    }

    /// Resolve `text` for a user positioned at `cursor`.
    ///
    /// Navigation buttons take precedence over entry labels.
    pub fn resolve(&self, cursor: Option<SessionCursor>, text: &str) -> Resolution<'a> {
        let text = text.trim();

        if text == MAIN_MENU {
            return Resolution::MainMenu;
        }

        let Some(cursor) = cursor else {
            return if text == BACK || text == NEXT {
                Resolution::NoActiveCategory
            } else {
                Resolution::Unmatched
            };
        };

        match text {
            BACK => {
                if cursor.page > 1 {
                    Resolution::ShowPage {
                        category: cursor.category,
                        page: cursor.page - 1,
                    }
                } else {
                    Resolution::Blocked(NavigationError::AlreadyFirstPage)
                }
            }
            NEXT => {
                let last = total_pages(self.store.len(cursor.category));
                if cursor.page < last {
                    Resolution::ShowPage {
                        category: cursor.category,
                        page: cursor.page + 1,
                    }
                } else {
                    Resolution::Blocked(NavigationError::NoMorePages)
                }
            }
            _ => self.find_entry(cursor.category, text),
        }
    }

    fn find_entry(&self, category: Category, text: &str) -> Resolution<'a> {
        self.store
            .entries(category)
            .iter()
            .find(|entry| entry.label() == text)
            .map(|entry| Resolution::Entry { category, entry })
            .unwrap_or(Resolution::Unmatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::pager::{paginate, NavStyle};

    fn cursor(category: Category, page: usize) -> Option<SessionCursor> {
        Some(SessionCursor {
            user_id: 1,
            category,
            page,
        })
    }

    fn sample_store() -> CatalogStore {
        let anime = (1..=35)
            .map(|i| {
                let entry = CatalogEntry::new(format!("Show {}", i), "Hindi - Japanese");
                if i % 3 == 0 { entry.with_emoji("🔥") } else { entry }
            })
            .collect();
        let series = vec![CatalogEntry::new("Dark", "Hindi + Multi Audio").with_emoji("⏳")];
        CatalogStore::from_categories([(Category::Anime, anime), (Category::Series, series)])
            .unwrap()
    }

    #[test]
    fn test_every_rendered_label_resolves_to_its_entry() {
        let store = sample_store();
        let resolver = SelectionResolver::new(&store);

        for page_number in 1..=2 {
            let page = paginate(&store, Category::Anime, page_number, NavStyle::Full).unwrap();
            let labels: Vec<_> = page.labels().collect();

            let mut unique = labels.clone();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), labels.len());

            for label in labels {
                match resolver.resolve(cursor(Category::Anime, page_number), label) {
                    Resolution::Entry { category, entry } => {
                        assert_eq!(category, Category::Anime);
                        assert_eq!(entry.label(), label);
                    }
                    other => panic!("{:?} did not resolve: {:?}", label, other),
                }
            }
        }
    }

    #[test]
    fn test_label_with_emoji_needs_the_emoji() {
        let store = sample_store();
        let resolver = SelectionResolver::new(&store);

        assert!(matches!(
            resolver.resolve(cursor(Category::Series, 1), "Dark ⏳"),
            Resolution::Entry { .. }
        ));
        assert_eq!(
            resolver.resolve(cursor(Category::Series, 1), "Dark"),
            Resolution::Unmatched
        );
    }

    #[test]
    fn test_resolution_is_scoped_to_active_category() {
        let store = sample_store();
        let resolver = SelectionResolver::new(&store);

        assert_eq!(
            resolver.resolve(cursor(Category::Anime, 1), "Dark ⏳"),
            Resolution::Unmatched
        );
    }

    #[test]
    fn test_back_and_next() {
        let store = sample_store();
        let resolver = SelectionResolver::new(&store);

        assert_eq!(
            resolver.resolve(cursor(Category::Anime, 1), NEXT),
            Resolution::ShowPage {
                category: Category::Anime,
                page: 2
            }
        );
        assert_eq!(
            resolver.resolve(cursor(Category::Anime, 2), BACK),
            Resolution::ShowPage {
                category: Category::Anime,
                page: 1
            }
        );
        assert_eq!(
            resolver.resolve(cursor(Category::Anime, 1), BACK),
            Resolution::Blocked(NavigationError::AlreadyFirstPage)
        );
        assert_eq!(
            resolver.resolve(cursor(Category::Anime, 2), NEXT),
            Resolution::Blocked(NavigationError::NoMorePages)
        );
    }

    #[test]
    fn test_navigation_tokens_beat_colliding_titles() {
        let store = CatalogStore::from_categories([(
            Category::Latest,
            vec![CatalogEntry::new(NEXT, "Hindi + Multi Audio")],
        )])
        .unwrap();
        let resolver = SelectionResolver::new(&store);

        assert_eq!(
            resolver.resolve(cursor(Category::Latest, 1), NEXT),
            Resolution::Blocked(NavigationError::NoMorePages)
        );
    }

    #[test]
    fn test_without_cursor() {
        let store = sample_store();
        let resolver = SelectionResolver::new(&store);

        assert_eq!(resolver.resolve(None, MAIN_MENU), Resolution::MainMenu);
        assert_eq!(resolver.resolve(None, BACK), Resolution::NoActiveCategory);
        assert_eq!(resolver.resolve(None, "Show 1"), Resolution::Unmatched);
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        let store = sample_store();
        let resolver = SelectionResolver::new(&store);

        assert!(matches!(
            resolver.resolve(cursor(Category::Anime, 1), "  Show 1 \n"),
            Resolution::Entry { .. }
        ));
    }
}
