use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{
        providers::{CatalogProvider, JikanProvider},
        CatalogClient, RecencyBuffer, RecommendationEngine,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

impl AppState {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Builds the state against the real Jikan API
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let provider = JikanProvider::new(config.jikan_api_url.clone(), config.upstream_timeout())?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Builds the state around any catalog provider
    pub fn with_provider(config: &Config, provider: Arc<dyn CatalogProvider>) -> Self {
        let catalog = CatalogClient::new(provider, config.min_score, config.upstream_timeout());
        let recent = RecencyBuffer::new(config.recent_capacity);
        Self::new(RecommendationEngine::new(catalog, config.fetch_limit, recent))
    }
}
