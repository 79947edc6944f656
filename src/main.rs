use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moodpick::{
    api::{cors_layer, create_router, AppState},
    config::Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moodpick=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!(error = %e, "Startup aborted");
        e
    })?;

    let state = AppState::from_config(&config)?;
    let app = create_router(state).layer(cors_layer(&config.cors_origin)?);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(
        address = %address,
        catalog = %config.jikan_api_url,
        "Server running"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
