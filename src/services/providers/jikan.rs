//! Jikan (unofficial MyAnimeList) API provider
//!
//! API Flow:
//! 1. Genre listing: /anime?genres={id}&limit={n}&min_score={s} → `{"data": [...]}`
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{ApiAnimeList, CatalogItem},
    services::providers::{CatalogProvider, GenreQuery},
};

#[derive(Clone)]
pub struct JikanProvider {
    http_client: HttpClient,
    api_url: String,
}

impl JikanProvider {
    /// Creates a provider whose requests give up after `timeout`
    pub fn new(api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn anime_url(&self) -> String {
        format!("{}/anime", self.api_url)
    }
}

#[async_trait::async_trait]
impl CatalogProvider for JikanProvider {
    async fn fetch_genre(&self, query: GenreQuery) -> AppResult<Vec<CatalogItem>> {
        let response = self
            .http_client
            .get(self.anime_url())
            .query(&[
                ("genres", query.genre_id),
                ("limit", query.limit),
                ("min_score", query.min_score),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            // The body is logged at debug only, never carried in the error
            tracing::debug!(status = %status, response = %body, "Jikan API error body");
            return Err(AppError::ExternalApi(format!(
                "Jikan API returned status {}",
                status
            )));
        }

        let response_text = response.text().await?;

        let list: ApiAnimeList = serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(response = %response_text, "Raw Jikan API response");
            AppError::ExternalApi(format!("Failed to parse Jikan response: {}", e))
        })?;

        tracing::debug!(
            genre_id = query.genre_id,
            results = list.data.len(),
            provider = "jikan",
            "Genre listing fetched"
        );

        Ok(list.data)
    }

    fn name(&self) -> &'static str {
        "jikan"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        http::StatusCode,
        response::IntoResponse,
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    /// Serves `router` on an ephemeral local port and returns its base URL
    async fn spawn_upstream(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn query() -> GenreQuery {
        GenreQuery {
            genre_id: 4,
            limit: 10,
            min_score: 6,
        }
    }

    #[tokio::test]
    async fn test_fetch_genre_sends_filters_and_decodes() {
        let router = Router::new().route(
            "/anime",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                // Echo the filters back through the title so the test can see them
                let title = format!(
                    "{}-{}-{}",
                    params["genres"], params["limit"], params["min_score"]
                );
                Json(json!({
                    "pagination": { "has_next_page": true },
                    "data": [{
                        "mal_id": 1,
                        "title": title,
                        "synopsis": "A story.",
                        "images": { "jpg": { "image_url": "https://example.test/1.jpg" } },
                        "score": 7.5,
                        "episodes": 12
                    }]
                }))
            }),
        );
        let base = spawn_upstream(router).await;
        let provider = JikanProvider::new(base, Duration::from_secs(5)).unwrap();

        let items = provider.fetch_genre(query()).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].mal_id, 1);
        assert_eq!(items[0].title, "4-10-6");
        assert_eq!(items[0].image_url(), Some("https://example.test/1.jpg"));
    }

    #[tokio::test]
    async fn test_fetch_genre_trailing_slash_in_base_url() {
        let router = Router::new().route("/anime", get(|| async { Json(json!({ "data": [] })) }));
        let base = spawn_upstream(router).await;
        let provider = JikanProvider::new(format!("{}/", base), Duration::from_secs(5)).unwrap();

        let items = provider.fetch_genre(query()).await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_genre_non_success_status() {
        let router = Router::new().route(
            "/anime",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down").into_response() }),
        );
        let base = spawn_upstream(router).await;
        let provider = JikanProvider::new(base, Duration::from_secs(5)).unwrap();

        let err = provider.fetch_genre(query()).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(msg) if msg.contains("429")));
    }

    #[tokio::test]
    async fn test_fetch_genre_error_body_left_out_of_message() {
        let router = Router::new().route(
            "/anime",
            get(|| async {
                let page = format!("<html>{}</html>", "maintenance ".repeat(5_000));
                (StatusCode::SERVICE_UNAVAILABLE, page).into_response()
            }),
        );
        let base = spawn_upstream(router).await;
        let provider = JikanProvider::new(base, Duration::from_secs(5)).unwrap();

        let err = provider.fetch_genre(query()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("503"));
        assert!(!message.contains("maintenance"));
        assert!(message.len() < 100);
    }

    #[tokio::test]
    async fn test_fetch_genre_malformed_body() {
        let router = Router::new().route("/anime", get(|| async { "<html>not json</html>" }));
        let base = spawn_upstream(router).await;
        let provider = JikanProvider::new(base, Duration::from_secs(5)).unwrap();

        let err = tokio_test::assert_err!(provider.fetch_genre(query()).await);
        assert!(matches!(err, AppError::ExternalApi(_)));
    }

    #[tokio::test]
    async fn test_fetch_genre_times_out() {
        let router = Router::new().route(
            "/anime",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "data": [] }))
            }),
        );
        let base = spawn_upstream(router).await;
        let provider = JikanProvider::new(base, Duration::from_millis(100)).unwrap();

        let err = provider.fetch_genre(query()).await.unwrap_err();
        assert!(matches!(err, AppError::HttpClient(e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn test_fetch_genre_connection_refused() {
        // Bind then drop so the port is very likely closed
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let provider =
            JikanProvider::new(format!("http://{}", addr), Duration::from_secs(1)).unwrap();
        let err = provider.fetch_genre(query()).await.unwrap_err();
        assert!(matches!(err, AppError::HttpClient(_)));
    }
}
