//! Anime catalog provider abstraction
//!
//! A provider performs the raw outbound request for one genre and reports every
//! transport or protocol problem as an error. Absorbing those errors is the job
//! of [`crate::services::catalog::CatalogClient`], not of the provider.

use crate::{error::AppResult, models::CatalogItem};

pub mod jikan;

pub use jikan::JikanProvider;

/// Query sent to the catalog for a single genre
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreQuery {
    pub genre_id: u32,
    pub limit: u32,
    pub min_score: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch up to `query.limit` items tagged with `query.genre_id`
    async fn fetch_genre(&self, query: GenreQuery) -> AppResult<Vec<CatalogItem>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
