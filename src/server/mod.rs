pub mod handlers;
pub mod render;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/healthz", get(handlers::health_check))
        .route("/{slug}", get(handlers::show_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
