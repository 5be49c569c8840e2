use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::error;

use crate::db::models::{CreatedItem, Item};
use crate::error::LarderError;
use crate::middleware::CreateItemPayload;
use crate::router::LarderState;

/// GET /health -> liveness only, no dependency check.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

pub async fn list_items(State(state): State<LarderState>) -> Result<Json<Vec<Item>>, LarderError> {
    let items = state.store.list_all().await?;
    Ok(Json(items))
}

pub async fn create_item(
    State(state): State<LarderState>,
    CreateItemPayload(new_item): CreateItemPayload,
) -> Result<(StatusCode, Json<CreatedItem>), LarderError> {
    let created = state.store.create(new_item).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn delete_item(
    State(state): State<LarderState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, LarderError> {
    state.store.delete_by_id(id).await?;
    Ok(Json(json!({ "message": "Deleted" })))
}

/// POST /seed -> dedicated failure body; full detail stays in the server log.
pub async fn seed_items(State(state): State<LarderState>) -> Response {
    match state.store.seed_samples().await {
        Ok(()) => Json(json!({ "message": "Database seeded with sample items" })).into_response(),
        Err(err) => {
            error!(error = %err, "seeding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Database seed error" })),
            )
                .into_response()
        }
    }
}
