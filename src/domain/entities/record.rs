//! Record entity persisted through the storage facade.

use serde::{Deserialize, Serialize};

/// Path segment that precedes a key in every short link (`/r/<key>`).
pub const REDIRECT_PREFIX: &str = "r";

/// A key/value pair mapping a short key to the original URL.
///
/// The key is the decimal checksum of `value` (see
/// [`crate::utils::checksum::hash_url`]). Records are written once when a URL
/// is shortened and read on every redirect; a second write under the same key
/// replaces the first.
///
/// Both fields are required on the wire, so a body missing `value` fails to
/// decode instead of producing an empty target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
