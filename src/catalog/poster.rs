//! Poster reference normalization
//!
//! Catalog files often carry share-page links from image hosts rather than
//! direct image URLs. The transport needs something it can attach as a photo,
//! so known share-page shapes are rewritten to their direct form.

use url::Url;

const IMAGE_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".webp"];

/// Normalize a poster reference into something attachable.
///
/// Returns `None` for blank values. Unknown hosts and non-URL references
/// (for example transport file ids) are returned unchanged.
///
/// # Examples
///
/// ```
/// use cinepulse::catalog::normalize_poster_url;
///
/// assert_eq!(
///     normalize_poster_url("https://ibb.co/AbC123").as_deref(),
///     Some("https://i.ibb.co/AbC123/poster.jpg")
/// );
/// assert_eq!(normalize_poster_url("  "), None);
/// ```
pub fn normalize_poster_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if IMAGE_EXTENSIONS.iter().any(|ext| raw.ends_with(ext)) || raw.contains("i.ibb.co") {
        return Some(raw.to_string());
    }

    let Ok(mut url) = Url::parse(raw) else {
        return Some(raw.to_string());
    };

    match url.host_str() {
        Some("ibb.co") | Some("www.ibb.co") => {
            let code = url
                .path_segments()
                .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
                .map(str::to_string);

            match code {
                Some(code) => Some(format!("https://i.ibb.co/{}/poster.jpg", code)),
                None => Some(raw.to_string()),
            }
        }
        Some("catbox.moe") => {
            if url.set_host(Some("files.catbox.moe")).is_ok() {
                Some(url.to_string())
            } else {
                Some(raw.to_string())
            }
        }
        _ => Some(raw.to_string()),
    }
}
