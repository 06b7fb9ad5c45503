use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/collection/:kind", get(handlers::collection_page))
        .route("/api/:kind/entries", get(handlers::get_entries))
        .route("/api/:kind/add", post(handlers::add_amount))
        .route("/api/:kind/export", get(handlers::export_collection))
        .route("/api/:kind/reset", post(handlers::reset_collection))
        .with_state(state)
}
