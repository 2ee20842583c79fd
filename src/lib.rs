pub mod config;
pub mod data;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: config::AppConfig,
}

/// Build the full application router. Shared by `main` and the integration
/// tests.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::root::discovery))
        .route("/health/live", get(routes::health::live))
        .route("/health/ready", get(routes::health::ready))
        .route("/characters", get(routes::characters::list))
        .route("/characters/{ids}", get(routes::characters::get_by_ids))
        .route("/episodes", get(routes::episodes::list))
        .route("/episodes/{ids}", get(routes::episodes::get_by_ids))
        .route("/locations", get(routes::locations::list))
        .route("/locations/{ids}", get(routes::locations::get_by_ids))
        .route("/organizations", get(routes::organizations::list))
        .route("/organizations/{ids}", get(routes::organizations::get_by_ids))
        .route("/titans", get(routes::titans::list))
        .route("/titans/{ids}", get(routes::titans::get_by_ids))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
