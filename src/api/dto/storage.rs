//! DTOs for the storage facade endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use validator::Validate;

pub use crate::domain::entities::StatusMessage;

/// Body of `POST /set-key`.
#[derive(Debug, Deserialize, Validate)]
pub struct SetKeyRequest {
    #[validate(length(min = 1, message = "key must not be empty"))]
    pub key: String,

    pub value: String,
}

/// The HTTP status of the response mirrors the envelope's `status` field.
impl IntoResponse for StatusMessage {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
