pub mod books;
pub mod error;
pub mod health;
pub mod reviews;

pub use error::AppError;

use serde::Deserialize;

use folio_core::storage::Page;

/// Pagination query parameters shared by the list endpoints.
///
/// `limit` has no upper bound; callers may request the full result set.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    Page::DEFAULT_LIMIT
}

impl From<PageQuery> for Page {
    fn from(query: PageQuery) -> Self {
        Page::new(query.skip, query.limit)
    }
}
