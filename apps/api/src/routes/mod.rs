pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::tailoring::handlers;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/generate", post(handlers::handle_generate))
        // The bundled frontend (index.html) and anything else under static/
        .fallback_service(static_files)
        .with_state(state)
}
