use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::ItemStore;
use crate::handlers::items;

/// Application context built once during bootstrap and injected into every
/// handler. The wrapped pool is the only cross-request shared state.
#[derive(Clone)]
pub struct LarderState {
    pub store: ItemStore,
}

impl LarderState {
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }
}

pub fn larder_router(state: LarderState) -> Router {
    Router::new()
        .route("/health", get(items::health))
        .route("/api/items", get(items::list_items).post(items::create_item))
        .route("/api/items/{id}", delete(items::delete_item))
        .route("/seed", post(items::seed_items))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
