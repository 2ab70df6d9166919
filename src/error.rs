//! Error types for the catalog core

use thiserror::Error;

use crate::catalog::Category;

/// Page navigation failures.
///
/// None of these are fatal: each is reported back to the requesting user as
/// a short notice and the session carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("page {page} is outside 1..={total_pages}")]
    OutOfRange { page: usize, total_pages: usize },

    #[error("already at the first page")]
    AlreadyFirstPage,

    #[error("no more pages")]
    NoMorePages,
}

/// Problems with catalog data, detected while building the store
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{category}: entry with an empty title")]
    MissingTitle { category: Category },

    #[error("{category}: label {label:?} is used by more than one entry")]
    DuplicateLabel { category: Category, label: String },

    #[error("{category}: malformed metadata for {title:?}")]
    Malformed {
        category: Category,
        title: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A caption that cannot be squeezed under the attachment caption limit
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptionError {
    #[error("caption header and footer need {needed} characters, limit is {limit}")]
    Overflow { needed: usize, limit: usize },
}
