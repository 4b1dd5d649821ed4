use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fpl_analytics_backend::config::Config;
use fpl_analytics_backend::store::DataStore;
use fpl_analytics_backend::{AppState, routes};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fpl_analytics_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Load the CSV snapshot; refuse to start on any data error rather
    // than serving a half-loaded store.
    tracing::info!("Loading FPL data from {}", config.data_dir.display());
    let store = match DataStore::load(&config.data_dir) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to load FPL data: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded {} players, {} teams, {} fixtures (latest gameweek {})",
        store.player_count(),
        store.team_count(),
        store.fixture_count(),
        store.last_gameweek()
    );

    let state = AppState {
        store: Arc::new(store),
    };
    let app = routes::router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .expect("failed to bind listen address");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
