use axum::{
    Json,
    extract::{FromRequest, Request},
};

use crate::db::models::NewItem;
use crate::error::LarderError;

/// Validated body for `POST /api/items`. Malformed JSON and missing or
/// empty `name` are rejected with a 400 before the store layer is reached.
pub struct CreateItemPayload(pub NewItem);

impl<S> FromRequest<S> for CreateItemPayload
where
    S: Send + Sync,
{
    type Rejection = LarderError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(new_item) = Json::<NewItem>::from_request(req, state)
            .await
            .map_err(|rejection| LarderError::InvalidRequest(rejection.body_text()))?;

        if new_item.name.trim().is_empty() {
            return Err(LarderError::InvalidRequest(
                "name must be a non-empty string".to_string(),
            ));
        }

        Ok(Self(new_item))
    }
}
