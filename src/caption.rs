//! Entry captions and how to deliver them
//!
//! A caption is `header + links + footer`. Photo captions are capped at
//! [`CAPTION_LIMIT`] characters; when the links push past it they are cut and
//! [`MORE_LINKS_MARKER`] is appended. If the header and footer alone leave no
//! room, the poster and the text go out as two separate messages instead.

use crate::catalog::CatalogEntry;
use crate::error::CaptionError;

/// Hard ceiling for captions attached to a photo
pub const CAPTION_LIMIT: usize = 1024;
/// Ceiling for a plain text message
pub const TEXT_LIMIT: usize = 4000;
/// Room kept free when cutting links, on top of header and footer
pub const TRUNCATION_SLACK: usize = 50;
pub const MORE_LINKS_MARKER: &str = "\n🔗 more links available…";
pub const DEFAULT_HELP_URL: &str = "https://t.me/cinepulsefam/31";

const UNRATED: &str = "N/A";

/// What the transport should send for an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// One photo carrying the caption
    Photo { poster: String, caption: String },
    /// The photo alone, then the caption as a text message
    Split { poster: String, caption: String },
    /// No poster; just the caption text
    Text { text: String },
}

impl Delivery {
    /// The caption or message text, whichever way it is sent
    pub fn text(&self) -> &str {
        match self {
            Delivery::Photo { caption, .. } | Delivery::Split { caption, .. } => caption,
            Delivery::Text { text } => text,
        }
    }
}

/// Builds entry captions with a fixed help footer
#[derive(Debug, Clone)]
pub struct CaptionFormatter {
    footer: String,
}

impl Default for CaptionFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_HELP_URL)
    }
}

impl CaptionFormatter {
    pub fn new(help_url: &str) -> Self {
        Self {
            footer: format!("\n\n⚠️ Link not opening?\n🔗 How to Open — {}", help_url),
        }
    }

    /// Title, rating and audio lines, followed by a blank line
    pub fn header(entry: &CatalogEntry) -> String {
        format!(
            "<b>{}</b>\n⭐ IMDb: {}\n🔊 Audio: {}\n\n",
            entry.title,
            entry.rating.as_deref().unwrap_or(UNRATED),
            entry.audio_track
        )
    }

    pub fn footer(&self) -> &str {
        &self.footer
    }

    /// Caption with every link, ignoring any limit
    pub fn full(&self, entry: &CatalogEntry) -> String {
        format!("{}{}{}", Self::header(entry), entry.links.join("\n"), self.footer)
    }

    /// Caption that fits in [`CAPTION_LIMIT`] characters.
    ///
    /// Links are cut to `CAPTION_LIMIT - header - footer - TRUNCATION_SLACK`
    /// characters when needed, and the result then ends with
    /// [`MORE_LINKS_MARKER`].
    pub fn format(&self, entry: &CatalogEntry) -> Result<String, CaptionError> {
        let header = Self::header(entry);
        let links = entry.links.join("\n");

        let header_len = char_len(&header);
        let footer_len = char_len(&self.footer);
        if header_len + char_len(&links) + footer_len <= CAPTION_LIMIT {
            return Ok(format!("{}{}{}", header, links, self.footer));
        }

        let reserved = header_len + footer_len + TRUNCATION_SLACK;
        if reserved >= CAPTION_LIMIT {
            return Err(CaptionError::Overflow {
                needed: reserved,
                limit: CAPTION_LIMIT,
            });
        }

        let kept: String = links.chars().take(CAPTION_LIMIT - reserved).collect();
        Ok(format!(
            "{}{}{}{}",
            header, kept, self.footer, MORE_LINKS_MARKER
        ))
    }

    /// Decide how an entry should be sent
    pub fn delivery(&self, entry: &CatalogEntry) -> Delivery {
        let fitted = self.format(entry);

        match (&entry.poster, fitted) {
            (Some(poster), Ok(caption)) => Delivery::Photo {
                poster: poster.clone(),
                caption,
            },
            (Some(poster), Err(err)) => {
                tracing::debug!("{:?}: {}, sending poster separately", entry.title, err);
                Delivery::Split {
                    poster: poster.clone(),
                    caption: truncate_chars(&self.full(entry), TEXT_LIMIT),
                }
            }
            (None, Ok(text)) => Delivery::Text { text },
            (None, Err(_)) => Delivery::Text {
                text: truncate_chars(&self.full(entry), TEXT_LIMIT),
            },
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
