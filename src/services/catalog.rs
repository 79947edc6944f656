use std::sync::Arc;
use std::time::Duration;

use crate::{
    models::{genre_id, CatalogItem},
    services::providers::{CatalogProvider, GenreQuery},
};

/// Fetches genre listings from a [`CatalogProvider`], never failing.
///
/// Unknown genres, transport errors, bad statuses, malformed bodies and
/// timeouts all come back as an empty list so that one bad genre cannot sink
/// a whole recommendation.
#[derive(Clone)]
pub struct CatalogClient {
    provider: Arc<dyn CatalogProvider>,
    min_score: u32,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(provider: Arc<dyn CatalogProvider>, min_score: u32, timeout: Duration) -> Self {
        Self {
            provider,
            min_score,
            timeout,
        }
    }

    pub async fn fetch_by_genre(&self, genre: &str, limit: u32) -> Vec<CatalogItem> {
        let Some(genre_id) = genre_id(genre) else {
            tracing::debug!(genre = %genre, "Genre not in catalog, skipping fetch");
            return Vec::new();
        };

        let query = GenreQuery {
            genre_id,
            limit,
            min_score: self.min_score,
        };

        match tokio::time::timeout(self.timeout, self.provider.fetch_genre(query)).await {
            Ok(Ok(items)) => {
                tracing::info!(
                    genre = %genre,
                    items = items.len(),
                    provider = self.provider.name(),
                    "Fetched genre listing"
                );
                items
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    genre = %genre,
                    error = %e,
                    provider = self.provider.name(),
                    "Error fetching genre listing"
                );
                Vec::new()
            }
            Err(_) => {
                tracing::warn!(
                    genre = %genre,
                    timeout_ms = self.timeout.as_millis() as u64,
                    provider = self.provider.name(),
                    "Genre listing timed out"
                );
                Vec::new()
            }
        }
    }
}
