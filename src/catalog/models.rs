//! Catalog data model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Audio track shown for anime entries that don't name one
const ANIME_AUDIO: &str = "Hindi - Japanese";
/// Audio track shown for every other category
const DEFAULT_AUDIO: &str = "Hindi + Multi Audio";

/// One of the fixed content buckets of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Latest,
    Anime,
    Series,
    Kdrama,
    South,
    Hollywood,
    Bollywood,
    Marvel,
    Adult,
    Multipart,
}

impl Category {
    /// All categories in main-menu order
    pub const ALL: [Category; 10] = [
        Category::Latest,
        Category::Anime,
        Category::Series,
        Category::Kdrama,
        Category::South,
        Category::Hollywood,
        Category::Bollywood,
        Category::Marvel,
        Category::Adult,
        Category::Multipart,
    ];

    /// Order in which categories are folded into the search index.
    ///
    /// A title present in several categories resolves to the one listed last.
    pub const SEARCH_ORDER: [Category; 10] = [
        Category::Anime,
        Category::Kdrama,
        Category::Bollywood,
        Category::Marvel,
        Category::Hollywood,
        Category::Series,
        Category::Latest,
        Category::Adult,
        Category::South,
        Category::Multipart,
    ];

    /// Short identifier used in config files and on the command line
    pub fn slug(self) -> &'static str {
        match self {
            Category::Latest => "latest",
            Category::Anime => "anime",
            Category::Series => "series",
            Category::Kdrama => "kdrama",
            Category::South => "south",
            Category::Hollywood => "hollywood",
            Category::Bollywood => "bollywood",
            Category::Marvel => "marvel",
            Category::Adult => "adult",
            Category::Multipart => "multipart",
        }
    }

    /// Name of the JSON file backing this category
    pub fn data_file(self) -> &'static str {
        match self {
            Category::Latest => "latest_data.json",
            Category::Anime => "anime_data.json",
            Category::Series => "series_data.json",
            Category::Kdrama => "kdrama_data.json",
            Category::South => "south_data.json",
            Category::Hollywood => "hollywood_data.json",
            Category::Bollywood => "bollywood_data.json",
            Category::Marvel => "marvel_data.json",
            Category::Adult => "eighteenplus_data.json",
            Category::Multipart => "multipart_data.json",
        }
    }

    /// Text of the main-menu button that opens this category
    pub fn button(self) -> &'static str {
        match self {
            Category::Latest => "𝐋𝐚𝐭𝐞𝐬𝐭 𝐑𝐞𝐥𝐞𝐚𝐬𝐞𝐬 ✨🎞️",
            Category::Anime => "𝐀𝐧𝐢𝐦𝐞 💀🔥",
            Category::Series => "𝐖𝐞𝐛𝐬𝐞𝐫𝐢𝐞𝐬 🎭📺",
            Category::Kdrama => "𝐊-𝐃𝐫𝐚𝐦𝐚𝐬 💕✨",
            Category::South => "𝐒𝐨𝐮𝐭𝐡 𝐌𝐨𝐯𝐢𝐞𝐬 💣🔥",
            Category::Hollywood => "𝐇𝐨𝐥𝐥𝐲𝐰𝐨𝐨𝐝 🎬🌍",
            Category::Bollywood => "𝐁𝐨𝐥𝐥𝐲𝐰𝐨𝐨𝐝 🌟🎥",
            Category::Marvel => "𝐌𝐚𝐫𝐯𝐞𝐥 + 𝐃𝐂 🦸‍♂️⚡",
            Category::Adult => "𝟏𝟖+ 𝐂𝐨𝐧𝐭𝐞𝐧𝐭 🔞🔥",
            Category::Multipart => "𝗠𝘂𝗹𝘁𝗶-𝗣𝗮𝗿𝘁 𝗠𝗼𝘃𝗶𝗲𝘀 🎬",
        }
    }

    /// Heading sent above the category keyboard
    pub fn heading(self) -> &'static str {
        match self {
            Category::Latest => "✨🎬 𝐋𝐚𝐭𝐞𝐬𝐭 𝐑𝐞𝐥𝐞𝐚𝐬𝐞𝐬",
            Category::Anime => "💀🔥 𝐀𝐧𝐢𝐦𝐞 𝐖𝐨𝐫𝐥𝐝",
            Category::Series => "📺🔥 𝐓𝐨𝐩 𝐖𝐞𝐛 𝐒𝐞𝐫𝐢𝐞𝐬",
            Category::Kdrama => "💕🎬 𝐊-𝐃𝐫𝐚𝐦𝐚 𝐂𝐨𝐥𝐥𝐞𝐜𝐭𝐢𝐨𝐧",
            Category::South => "🔥🎭 𝐒𝐨𝐮𝐭𝐡 𝐈𝐧𝐝𝐢𝐚𝐧 𝐂𝐨𝐥𝐥𝐞𝐜𝐭𝐢𝐨𝐧",
            Category::Hollywood => "🎬🌍 𝐇𝐨𝐥𝐥𝐲𝐰𝐨𝐨𝐝 𝐂𝐨𝐥𝐥𝐞𝐜𝐭𝐢𝐨𝐧",
            Category::Bollywood => "🌟🎥 𝐁𝐨𝐥𝐥𝐲𝐰𝐨𝐨𝐝 𝐂𝐨𝐥𝐥𝐞𝐜𝐭𝐢𝐨𝐧",
            Category::Marvel => "🦸🛡️ 𝐌𝐚𝐫𝐯𝐞𝐥 + 𝐃𝐂 𝐂𝐨𝐥𝐥𝐞𝐜𝐭𝐢𝐨𝐧",
            Category::Adult => "🔞🔥 𝟏𝟖+ 𝐂𝐨𝐧𝐭𝐞𝐧𝐭",
            Category::Multipart => "📦🍿 𝐌𝐮𝐥𝐭𝐢𝐩𝐚𝐫𝐭 𝐌𝐨𝐯𝐢𝐞𝐬 𝐂𝐨𝐥𝐥𝐞𝐜𝐭𝐢𝐨𝐧",
        }
    }

    /// Audio track used when an entry doesn't specify one
    pub fn default_audio(self) -> &'static str {
        match self {
            Category::Anime => ANIME_AUDIO,
            _ => DEFAULT_AUDIO,
        }
    }

    /// Look a category up by its slug
    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }

    /// Find the category whose main-menu button matches `text`
    pub fn from_button(text: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.button() == text)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A single selectable catalog item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    /// Decorative suffix shown after the title on buttons
    pub emoji: Option<String>,
    /// Poster image reference (URL or transport file id)
    pub poster: Option<String>,
    pub links: Vec<String>,
    pub audio_track: String,
    /// IMDb rating, shown as "N/A" when missing
    pub rating: Option<String>,
}

impl CatalogEntry {
    /// Create an entry with no optional metadata
    pub fn new(title: impl Into<String>, audio_track: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            emoji: None,
            poster: None,
            links: Vec::new(),
            audio_track: audio_track.into(),
            rating: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    /// Button text for this entry.
    ///
    /// This exact string is both what gets rendered and what a click is
    /// matched against, so every code path must build it through here.
    pub fn label(&self) -> String {
        format!("{} {}", self.title, self.emoji.as_deref().unwrap_or(""))
            .trim()
            .to_string()
    }
}

/// Entry metadata as stored in a catalog JSON file (keyed by title)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub links: Vec<String>,
    #[serde(default)]
    pub audio: Option<String>,
    #[serde(default)]
    pub imdb: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_button_round_trips_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_button(category.button()), Some(category));
        }
        assert_eq!(Category::from_button("Anime"), None);
    }

    #[test]
    fn test_all_follows_declaration_order() {
        for (position, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(category as usize, position);
        }
    }

    #[test]
    fn test_from_slug() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.slug()), Some(category));
        }
        assert_eq!(Category::from_slug("Anime"), None);
        assert_eq!(Category::from_slug("cartoons"), None);
    }

    #[test]
    fn test_search_order_covers_all_categories() {
        for category in Category::ALL {
            assert!(Category::SEARCH_ORDER.contains(&category));
        }
    }

    #[test]
    fn test_default_audio() {
        assert_eq!(Category::Anime.default_audio(), "Hindi - Japanese");
        assert_eq!(Category::Marvel.default_audio(), "Hindi + Multi Audio");
    }

    #[test]
    fn test_label_with_and_without_emoji() {
        let plain = CatalogEntry::new("Naruto", ANIME_AUDIO);
        assert_eq!(plain.label(), "Naruto");

        let decorated = CatalogEntry::new("Naruto", ANIME_AUDIO).with_emoji("🍥");
        assert_eq!(decorated.label(), "Naruto 🍥");
    }

    #[test]
    fn test_label_trims_surrounding_whitespace() {
        let entry = CatalogEntry::new(" Dark ", DEFAULT_AUDIO).with_emoji(" ");
        assert_eq!(entry.label(), "Dark");
    }

    #[test]
    fn test_raw_entry_defaults() {
        let raw: RawEntry = serde_json::from_str(r#"{"emoji": "🔥"}"#).unwrap();
        assert_eq!(raw.emoji.as_deref(), Some("🔥"));
        assert!(raw.links.is_empty());
        assert!(raw.imdb.is_none());
    }
}
