//! Status envelope exchanged with the storage facade.

use serde::{Deserialize, Serialize};

/// Status code carried by a successful envelope.
pub const STATUS_OK: u16 = 200;

/// Status code carried by a "Key not found" envelope.
pub const STATUS_NOT_FOUND: u16 = 404;

/// `{"message": ..., "status": ...}` envelope.
///
/// The facade answers every call with it except a `GET /get-key` hit, which
/// returns a [`super::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
    pub status: u16,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn is_not_found(&self) -> bool {
        self.status == STATUS_NOT_FOUND
    }
}
