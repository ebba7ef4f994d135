pub mod config;
pub mod error;
pub mod routes;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get, Router};
use flashcard_core::DeckCatalog;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ServerConfig, CATALOG_FILE};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DeckCatalog>,
    pub decks_dir: Arc<PathBuf>,
}

impl AppState {
    /// Load the catalog from `decks.json` inside the decks directory.
    pub async fn load(decks_dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let decks_dir = decks_dir.as_ref().to_path_buf();
        let catalog_path = decks_dir.join(CATALOG_FILE);
        let content = tokio::fs::read_to_string(&catalog_path)
            .await
            .map_err(|e| anyhow::anyhow!("failed to read {}: {}", catalog_path.display(), e))?;
        let catalog = DeckCatalog::from_json(&content)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            decks_dir: Arc::new(decks_dir),
        })
    }
}

/// Build the router: static deck files under `/decks`, JSON API under `/api`.
pub fn build_router(state: AppState) -> Router {
    let static_decks = ServeDir::new(state.decks_dir.as_path());

    Router::new()
        .route("/health", get(health_check))
        .route("/api/decks", get(routes::decks::list))
        .route("/api/decks/:id/cards", get(routes::decks::cards))
        .nest_service("/decks", static_decks)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!("Loading deck catalog from {}", config.catalog_path().display());
    let state = AppState::load(&config.decks_dir).await?;
    tracing::info!("{} deck(s) available", state.catalog.decks().len());

    let app = build_router(state);

    let addr = config.addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
