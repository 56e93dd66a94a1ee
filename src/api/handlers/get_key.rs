//! Handler for reading a key.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{debug, error};

use crate::api::dto::storage::StatusMessage;
use crate::domain::entities::Record;
use crate::state::StorageState;

/// Returns the record stored under a key.
///
/// # Endpoint
///
/// `GET /get-key/{key}`
///
/// # Response
///
/// - **200 OK**: `{"key": "42", "value": "https://example.com"}`
/// - **404 Not Found**: `{"message": "Key not found", "status": 404}`
/// - **500 Internal Server Error**: `{"message": "Something went wrong", "status": 500}`
pub async fn get_key_handler(
    Path(key): Path<String>,
    State(state): State<StorageState>,
) -> Result<Json<Record>, StatusMessage> {
    debug!(key = %key, "<Get key>");

    match state.engine.get(&key).await {
        Ok(Some(value)) => Ok(Json(Record::new(key, value))),
        Ok(None) => Err(StatusMessage::new(
            "Key not found",
            StatusCode::NOT_FOUND.as_u16(),
        )),
        Err(e) => {
            error!(key = %key, "<Get key> error: {}", e);
            Err(StatusMessage::new(
                "Something went wrong",
                StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            ))
        }
    }
}
