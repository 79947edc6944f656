use futures::future::join_all;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{genres_for, mood_names, CatalogItem, Recommendation},
    services::{catalog::CatalogClient, recency::RecencyBuffer},
};

/// Default per-genre fetch limit
pub const DEFAULT_FETCH_LIMIT: u32 = 10;

pub const NO_FRESH_RECOMMENDATION: &str = "No new anime found for this mood. Try again.";

struct EngineState {
    recent: RecencyBuffer,
    rng: StdRng,
}

/// Picks one anime for a mood, avoiding recently recommended titles
///
/// All genres of a mood are fetched, in declaration order, into one candidate
/// pool. Items reached through several genres appear once per genre, which
/// makes them proportionally more likely to be picked.
pub struct RecommendationEngine {
    catalog: CatalogClient,
    fetch_limit: u32,
    state: Mutex<EngineState>,
}

impl RecommendationEngine {
    pub fn new(catalog: CatalogClient, fetch_limit: u32, recent: RecencyBuffer) -> Self {
        Self::with_rng(catalog, fetch_limit, recent, StdRng::from_entropy())
    }

    pub fn with_rng(
        catalog: CatalogClient,
        fetch_limit: u32,
        recent: RecencyBuffer,
        rng: StdRng,
    ) -> Self {
        Self {
            catalog,
            fetch_limit,
            state: Mutex::new(EngineState { recent, rng }),
        }
    }

    pub async fn recommend(&self, mood: &str) -> AppResult<Recommendation> {
        let mood = mood.to_lowercase();
        let genres = genres_for(&mood).ok_or_else(|| AppError::InvalidMood {
            valid: mood_names(),
        })?;

        let pool = self.candidate_pool(genres).await;

        tracing::debug!(mood = %mood, candidates = pool.len(), "Built candidate pool");

        // Filter, pick and record under one lock so concurrent requests
        // cannot hand out the same fresh item twice
        let mut state = self.state.lock().await;
        let EngineState { recent, rng } = &mut *state;

        let fresh: Vec<&CatalogItem> = pool
            .iter()
            .filter(|item| !recent.contains(item.mal_id))
            .collect();

        let Some(chosen) = fresh.choose(rng).copied().cloned() else {
            tracing::info!(
                mood = %mood,
                candidates = pool.len(),
                "No fresh candidates, clearing recent recommendations"
            );
            recent.clear();
            return Err(AppError::NotFound(NO_FRESH_RECOMMENDATION.to_string()));
        };

        recent.append(chosen.mal_id);

        tracing::info!(
            mood = %mood,
            mal_id = chosen.mal_id,
            title = %chosen.title,
            fresh = fresh.len(),
            "Recommendation chosen"
        );

        Ok(Recommendation::from(chosen))
    }

    /// Recently recommended ids, oldest first
    pub async fn recent_ids(&self) -> Vec<u64> {
        self.state.lock().await.recent.iter().collect()
    }

    async fn candidate_pool(&self, genres: &[&str]) -> Vec<CatalogItem> {
        let fetches = genres
            .iter()
            .map(|genre| self.catalog.fetch_by_genre(genre, self.fetch_limit));

        join_all(fetches).await.into_iter().flatten().collect()
    }
}
