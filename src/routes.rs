use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers;

/// Builds the full application router. Shared with the integration
/// tests so they exercise exactly what the binary serves.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::page::dashboard))
        .route("/health", get(handlers::catalog::health))
        .route("/api/players", get(handlers::catalog::list_players))
        .route("/api/teams", get(handlers::catalog::list_teams))
        .route(
            "/api/charts/performance",
            get(handlers::performance::get_performance_chart),
        )
        .route(
            "/api/charts/cost-performance",
            get(handlers::cost_performance::get_cost_performance_chart),
        )
        .route(
            "/api/charts/ict",
            get(handlers::ict::get_ict_chart),
        )
        .route(
            "/api/charts/fixture-difficulty",
            get(handlers::fixture_difficulty::get_fixture_difficulty_chart),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
