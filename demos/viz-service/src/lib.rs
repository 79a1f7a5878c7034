pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use state::AppState;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let demo_routes = Router::new()
        .route("/viz", get(api::viz))
        .route("/struct", get(api::demo_struct))
        .route("/slice", get(api::demo_slice));

    Router::new()
        .route("/health", get(api::health_check))
        .route("/api/v1/marshal", post(api::marshal))
        .merge(demo_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
