//! Handler for writing a key.

use axum::{body::Bytes, extract::State, http::StatusCode};
use tracing::{error, info, warn};
use validator::Validate;

use crate::api::dto::storage::{SetKeyRequest, StatusMessage};
use crate::state::StorageState;

/// Writes a value under a key, replacing any previous value.
///
/// # Endpoint
///
/// `POST /set-key`
///
/// # Request Body
///
/// ```json
/// { "key": "42", "value": "https://example.com" }
/// ```
///
/// The body is parsed as JSON regardless of `Content-Type`.
///
/// # Response Codes
///
/// - **200 OK**: `{"message": "Success", "status": 200}`
/// - **400 Bad Request**: body is not a record, or the key is empty
/// - **422 Unprocessable Entity**: the engine refused the write
pub async fn set_key_handler(State(state): State<StorageState>, body: Bytes) -> StatusMessage {
    let params = match serde_json::from_slice::<SetKeyRequest>(&body) {
        Ok(params) => params,
        Err(e) => {
            warn!("<Set key> invalid body: {}", e);
            return StatusMessage::new(
                format!("Invalid body: {}", e),
                StatusCode::BAD_REQUEST.as_u16(),
            );
        }
    };

    if let Err(e) = params.validate() {
        warn!("<Set key> invalid params: {}", e);
        return StatusMessage::new(
            "key must not be empty",
            StatusCode::BAD_REQUEST.as_u16(),
        );
    }

    info!(key = %params.key, "<Set key>");

    match state.engine.set(&params.key, &params.value).await {
        Ok(()) => StatusMessage::new("Success", StatusCode::OK.as_u16()),
        Err(e) => {
            error!(key = %params.key, "<Set key> error: {}", e);
            StatusMessage::new(
                format!("Error: {}", e),
                StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            )
        }
    }
}
