//! Handler for engine reachability checks.

use axum::{extract::State, http::StatusCode};
use tracing::error;

use crate::api::dto::storage::StatusMessage;
use crate::state::StorageState;

/// Pings the engine behind the facade.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response Codes
///
/// - **200 OK**: `{"message": "PONG", "status": 200}`
/// - **503 Service Unavailable**: the engine did not answer
pub async fn ping_handler(State(state): State<StorageState>) -> StatusMessage {
    match state.engine.ping().await {
        Ok(pong) => StatusMessage::new(pong, StatusCode::OK.as_u16()),
        Err(e) => {
            error!(engine = state.engine.name(), "<Ping> error: {}", e);
            StatusMessage::new(
                "Backend unreachable",
                StatusCode::SERVICE_UNAVAILABLE.as_u16(),
            )
        }
    }
}
