//! Paged category menus, per-user cursors and click resolution

pub mod pager;
pub mod resolver;
pub mod session;

pub use pager::{paginate, total_pages, NavStyle, Page, PAGE_SIZE, ROW_WIDTH};
pub use resolver::{Resolution, SelectionResolver};
pub use session::{SessionCursor, SessionStore, UserId};

pub const BACK: &str = "⏮ Back";
pub const NEXT: &str = "⏭ Next";
pub const MAIN_MENU: &str = "🏠 Main Menu";

/// Whether `text` is one of the fixed navigation buttons
pub fn is_navigation_token(text: &str) -> bool {
    matches!(text, BACK | NEXT | MAIN_MENU)
}
