use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use prashasti::{assets, catalog, config, routes, state};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prashasti=info,tower_http=info".into()),
        )
        .init();

    let config = config::Config::from_env()?;
    let config = Arc::new(config);

    let assets = Arc::new(assets::AssetCache::new(config.asset_base_url.clone()));

    let state = Arc::new(state::AppState {
        config: config.clone(),
        assets: assets.clone(),
    });

    // Warm the gallery in the background so the first render does not wait on
    // fifteen downloads.
    {
        let config = config.clone();
        let assets = assets.clone();
        tokio::spawn(async move {
            let mut ids: Vec<&str> = vec![&config.logo_file_id, &config.signature_file_id];
            ids.extend(catalog::CHARACTER_IDS.iter().map(|(_, id)| *id));
            assets.warm(&ids).await;
        });
    }

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/generate", post(routes::generate_certificate))
        .route("/api/assets", get(routes::asset_status))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Prashasti listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
