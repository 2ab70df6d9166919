//! Chat-facing entry points of the catalog core
//!
//! [`CatalogBot`] ties the store, pager, session cursors, resolver, search
//! index and caption formatter together. Every call returns a [`Reply`] that
//! the transport renders; nothing here talks to the network.

use std::sync::Arc;
use tracing::debug;

use crate::caption::{CaptionFormatter, Delivery};
use crate::catalog::{CatalogEntry, CatalogStore, Category};
use crate::config::BotConfig;
use crate::error::NavigationError;
use crate::navigation::{
    paginate, NavStyle, Page, Resolution, SelectionResolver, SessionStore, UserId,
};
use crate::search::SearchIndex;

pub const SEARCH_BUTTON: &str = "𝐒𝐞𝐚𝐫𝐜𝐡 🔍🧠";
pub const HOW_TO_USE_BUTTON: &str = "𝐇𝐨𝐰 𝐭𝐨 𝐔𝐬𝐞 📘💡";
pub const REQUEST_BUTTON: &str = "𝐑𝐞𝐪𝐮𝐞𝐬𝐭 𝐚 𝐂𝐨𝐧𝐭𝐞𝐧𝐭 📝💌";

/// Top-level keyboard layout
pub fn main_menu() -> Vec<Vec<&'static str>> {
    use Category::*;
    vec![
        vec![Latest.button()],
        vec![Anime.button(), Series.button()],
        vec![Kdrama.button(), South.button()],
        vec![Hollywood.button(), Bollywood.button()],
        vec![Marvel.button(), Adult.button()],
        vec![Multipart.button()],
        vec![SEARCH_BUTTON],
        vec![HOW_TO_USE_BUTTON, REQUEST_BUTTON],
    ]
}

/// Short user-facing notices for recoverable failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoMorePages,
    AlreadyFirstPage,
    InvalidOption,
    NoResults,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::NoMorePages => "❌ No more pages.",
            Notice::AlreadyFirstPage => "❌ Already at first page.",
            Notice::InvalidOption => "❌ Invalid option. Please use the menu.",
            Notice::NoResults => "😔 No results found.",
        }
    }
}

impl From<NavigationError> for Notice {
    fn from(err: NavigationError) -> Self {
        match err {
            NavigationError::OutOfRange { .. } | NavigationError::NoMorePages => Notice::NoMorePages,
            NavigationError::AlreadyFirstPage => Notice::AlreadyFirstPage,
        }
    }
}

/// A selected or found entry, ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetail {
    pub title: String,
    pub category: Category,
    pub delivery: Delivery,
}

/// Render-ready result of one user interaction
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// A category page with its keyboard
    Menu(Page),
    Entry(EntryDetail),
    /// Show the top-level keyboard
    MainMenu,
    /// Ask the user to type a title
    SearchPrompt,
    /// Usage guide, supplied by the transport
    HowToUse,
    /// Content request flow, supplied by the transport
    RequestContent,
    Notice(Notice),
}

/// The catalog navigation and lookup core
#[derive(Debug)]
pub struct CatalogBot {
    store: Arc<CatalogStore>,
    index: SearchIndex,
    sessions: SessionStore,
    captions: CaptionFormatter,
    /// Effective style per category, in `Category::ALL` order
    nav_styles: [NavStyle; Category::ALL.len()],
}

impl CatalogBot {
    /// Create a bot over a loaded catalog
    pub fn new(store: Arc<CatalogStore>, config: &BotConfig) -> Self {
        let index = SearchIndex::build(Arc::clone(&store));
        let nav_styles = Category::ALL.map(|category| config.nav_style(category));

        Self {
            store,
            index,
            sessions: SessionStore::new(),
            captions: CaptionFormatter::new(&config.help_url),
            nav_styles,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn nav_style(&self, category: Category) -> NavStyle {
        self.nav_styles[category as usize]
    }

    /// Render a category page and make it the user's cursor.
    ///
    /// The cursor only moves when the page exists.
    pub fn show_category(&self, user_id: UserId, category: Category, page: usize) -> Reply {
        match paginate(&self.store, category, page, self.nav_style(category)) {
            Ok(rendered) => {
                self.sessions.set_cursor(user_id, category, page);
                Reply::Menu(rendered)
            }
            Err(err) => {
                debug!("User {}: {} page {}: {}", user_id, category, page, err);
                Reply::Notice(err.into())
            }
        }
    }

    /// Handle any text the user sent: a menu button, a page button, an
    /// entry label or a free-form title.
    pub fn handle_input(&self, user_id: UserId, text: &str) -> Reply {
        let text = text.trim();

        if let Some(category) = Category::from_button(text) {
            return self.show_category(user_id, category, 1);
        }
        match text {
            SEARCH_BUTTON => return Reply::SearchPrompt,
            HOW_TO_USE_BUTTON => return Reply::HowToUse,
            REQUEST_BUTTON => return Reply::RequestContent,
            _ => {}
        }

        let cursor = self.sessions.cursor(user_id);
        match SelectionResolver::new(&self.store).resolve(cursor, text) {
            Resolution::ShowPage { category, page } => self.show_category(user_id, category, page),
            Resolution::MainMenu => {
                self.sessions.clear(user_id);
                Reply::MainMenu
            }
            Resolution::Entry { category, entry } => Reply::Entry(self.detail(category, entry)),
            Resolution::Blocked(err) => Reply::Notice(err.into()),
            Resolution::NoActiveCategory => Reply::Notice(Notice::InvalidOption),
            Resolution::Unmatched => match self.search(text) {
                Some(detail) => Reply::Entry(detail),
                None if cursor.is_some() => Reply::Notice(Notice::InvalidOption),
                None => Reply::Notice(Notice::NoResults),
            },
        }
    }

    /// Fuzzy lookup across every category
    pub fn search(&self, query: &str) -> Option<EntryDetail> {
        let hit = self.index.search(query)?;
        debug!(
            "Search {:?} -> {:?} ({}, score {:.2})",
            query, hit.title, hit.category, hit.score
        );
        Some(self.detail(hit.category, hit.entry))
    }

    fn detail(&self, category: Category, entry: &CatalogEntry) -> EntryDetail {
        EntryDetail {
            title: entry.title.clone(),
            category,
            delivery: self.captions.delivery(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{BACK, MAIN_MENU, NEXT};

    fn anime_entries(count: usize) -> Vec<CatalogEntry> {
        (1..=count)
            .map(|i| CatalogEntry::new(format!("Anime {:02}", i), Category::Anime.default_audio()))
            .collect()
    }

    fn bot() -> CatalogBot {
        let store = CatalogStore::from_categories([
            (Category::Anime, anime_entries(35)),
            (
                Category::Series,
                vec![
                    CatalogEntry::new("Dark", "Hindi + Multi Audio")
                        .with_emoji("⏳")
                        .with_poster("https://i.ibb.co/d/poster.jpg"),
                    CatalogEntry::new("Echo", "Hindi + Multi Audio").with_rating("7.0"),
                ],
            ),
            (
                Category::Marvel,
                vec![CatalogEntry::new("Echo", "Hindi + Multi Audio").with_rating("5.9")],
            ),
        ])
        .unwrap();
        CatalogBot::new(Arc::new(store), &BotConfig::default())
    }

    fn menu(reply: Reply) -> Page {
        match reply {
            Reply::Menu(page) => page,
            other => panic!("expected a menu, got {:?}", other),
        }
    }

    #[test]
    fn test_category_button_opens_first_page() {
        let bot = bot();
        let page = menu(bot.handle_input(1, Category::Anime.button()));

        assert_eq!(page.number, 1);
        assert_eq!(page.rows.len(), 15);
        assert_eq!(bot.sessions().cursor(1).map(|c| c.page), Some(1));
    }

    #[test]
    fn test_show_category_scenario() {
        let bot = bot();

        let first = menu(bot.show_category(9, Category::Anime, 1));
        assert_eq!(first.rows.len(), 15);

        let second = menu(bot.show_category(9, Category::Anime, 2));
        assert_eq!(second.rows.len(), 3);
        assert!(second.has_prev);
        assert!(!second.has_next);

        assert_eq!(
            bot.show_category(9, Category::Anime, 3),
            Reply::Notice(Notice::NoMorePages)
        );
        // failed render leaves the cursor where it was
        assert_eq!(bot.sessions().cursor(9).map(|c| c.page), Some(2));
    }

    #[test]
    fn test_next_back_round_trip() {
        let bot = bot();
        bot.handle_input(1, Category::Anime.button());

        assert_eq!(menu(bot.handle_input(1, NEXT)).number, 2);
        assert_eq!(bot.handle_input(1, NEXT), Reply::Notice(Notice::NoMorePages));
        assert_eq!(menu(bot.handle_input(1, BACK)).number, 1);
        assert_eq!(
            bot.handle_input(1, BACK),
            Reply::Notice(Notice::AlreadyFirstPage)
        );
    }

    #[test]
    fn test_users_do_not_share_cursors() {
        let bot = bot();
        bot.handle_input(1, Category::Anime.button());
        bot.handle_input(1, NEXT);
        bot.handle_input(2, Category::Series.button());

        let one = bot.sessions().cursor(1).unwrap();
        let two = bot.sessions().cursor(2).unwrap();
        assert_eq!((one.category, one.page), (Category::Anime, 2));
        assert_eq!((two.category, two.page), (Category::Series, 1));
    }

    #[test]
    fn test_switching_category_resets_page() {
        let bot = bot();
        bot.handle_input(1, Category::Anime.button());
        bot.handle_input(1, NEXT);
        bot.handle_input(1, Category::Series.button());
        bot.handle_input(1, Category::Anime.button());

        assert_eq!(bot.sessions().cursor(1).map(|c| c.page), Some(1));
    }

    #[test]
    fn test_selecting_entry_label() {
        let bot = bot();
        bot.handle_input(1, Category::Series.button());

        match bot.handle_input(1, "Dark ⏳") {
            Reply::Entry(detail) => {
                assert_eq!(detail.title, "Dark");
                assert_eq!(detail.category, Category::Series);
                assert!(matches!(detail.delivery, Delivery::Photo { .. }));
            }
            other => panic!("expected entry, got {:?}", other),
        }
    }

    #[test]
    fn test_main_menu_clears_cursor() {
        let bot = bot();
        bot.handle_input(1, Category::Anime.button());

        assert_eq!(bot.handle_input(1, MAIN_MENU), Reply::MainMenu);
        assert!(bot.sessions().cursor(1).is_none());
        assert_eq!(
            bot.handle_input(1, NEXT),
            Reply::Notice(Notice::InvalidOption)
        );
    }

    #[test]
    fn test_unmatched_text_falls_back_to_search() {
        let bot = bot();
        bot.handle_input(1, Category::Anime.button());

        match bot.handle_input(1, "dark") {
            Reply::Entry(detail) => assert_eq!(detail.title, "Dark"),
            other => panic!("expected search hit, got {:?}", other),
        }
        assert_eq!(
            bot.handle_input(1, "qqqqqqqqqqqqqqqqqqqq"),
            Reply::Notice(Notice::InvalidOption)
        );
        assert_eq!(
            bot.handle_input(2, "qqqqqqqqqqqqqqqqqqqq"),
            Reply::Notice(Notice::NoResults)
        );
    }

    #[test]
    fn test_search_duplicate_title_prefers_later_category() {
        // Marvel is folded before Series
        let bot = bot();
        let detail = bot.search("Echo").unwrap();
        assert_eq!(detail.category, Category::Series);
        assert!(detail.delivery.text().contains("IMDb: 7.0"));
    }

    #[test]
    fn test_fixed_buttons() {
        let bot = bot();
        assert_eq!(bot.handle_input(1, SEARCH_BUTTON), Reply::SearchPrompt);
        assert_eq!(bot.handle_input(1, HOW_TO_USE_BUTTON), Reply::HowToUse);
        assert_eq!(bot.handle_input(1, REQUEST_BUTTON), Reply::RequestContent);
    }

    #[test]
    fn test_main_menu_lists_every_category() {
        let buttons: Vec<&str> = main_menu().into_iter().flatten().collect();
        for category in Category::ALL {
            assert!(buttons.contains(&category.button()));
        }
    }

    #[test]
    fn test_adult_uses_adaptive_nav() {
        let store = CatalogStore::from_categories([(
            Category::Adult,
            vec![CatalogEntry::new("Night", "Hindi + Multi Audio")],
        )])
        .unwrap();
        let bot = CatalogBot::new(Arc::new(store), &BotConfig::default());

        let page = menu(bot.show_category(1, Category::Adult, 1));
        assert_eq!(page.controls, vec![vec![MAIN_MENU.to_string()]]);
    }

    #[test]
    fn test_config_overrides_nav_style() {
        let store = CatalogStore::from_categories([(
            Category::Latest,
            vec![CatalogEntry::new("Fresh", "Hindi + Multi Audio")],
        )])
        .unwrap();
        let mut config = BotConfig::default();
        config.nav_styles.insert(Category::Latest, NavStyle::Adaptive);
        config.nav_styles.insert(Category::Adult, NavStyle::Full);
        let bot = CatalogBot::new(Arc::new(store), &config);

        for category in Category::ALL {
            assert_eq!(bot.nav_style(category), config.nav_style(category));
        }
        let page = menu(bot.show_category(1, Category::Latest, 1));
        assert_eq!(page.controls, vec![vec![MAIN_MENU.to_string()]]);
    }
}
