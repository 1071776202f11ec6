use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/view", get(handlers::get_view))
        .route("/api/upload", post(handlers::upload))
        .route("/api/interval", post(handlers::set_interval))
        .route("/api/period/previous", post(handlers::period_previous))
        .route("/api/period/next", post(handlers::period_next))
        .route("/api/period/latest", post(handlers::period_latest))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
