//! Redirect target resolution service.

use std::borrow::Cow;
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::repositories::StorageClient;
use crate::error::{AppError, map_storage_error};

/// Service resolving `/r/<key>` paths to their stored URLs.
pub struct RedirectService {
    storage: Arc<dyn StorageClient>,
}

impl RedirectService {
    pub fn new(storage: Arc<dyn StorageClient>) -> Self {
        Self { storage }
    }

    /// Extracts the key from a request path.
    ///
    /// The key is the segment right after the redirect prefix: in
    /// `/r/123/extra` the key is `123` and trailing segments are ignored.
    /// The segment is percent-decoded, so `/r/a%20b` names the key `a b`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the path has fewer than two segments,
    /// the key segment is empty, or it does not decode to UTF-8.
    pub fn extract_key(path: &str) -> Result<Cow<'_, str>, AppError> {
        let mut segments = path.strip_prefix('/').unwrap_or(path).split('/');
        let _prefix = segments.next();

        let missing = || {
            warn!(path = %path, "Key not found in url path");
            AppError::not_found("missing key", json!({ "path": path }))
        };

        let segment = segments
            .next()
            .filter(|segment| !segment.is_empty())
            .ok_or_else(missing)?;

        match urlencoding::decode(segment) {
            Ok(key) if !key.is_empty() => Ok(key),
            _ => Err(missing()),
        }
    }

    /// Resolves a request path to the URL it should redirect to.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the path carries no key or the key is unknown
    /// - [`AppError::Validation`] if the stored target is empty
    /// - [`AppError::Unavailable`] if the storage facade cannot be reached
    /// - [`AppError::Internal`] if the stored record cannot be decoded
    pub async fn resolve(&self, path: &str) -> Result<String, AppError> {
        let key = Self::extract_key(path)?;

        let record = self.storage.fetch(&key).await.map_err(|e| {
            warn!(key = %key, "Failed to resolve key: {}", e);
            map_storage_error(e, &key)
        })?;

        if record.value.is_empty() {
            warn!(key = %key, "received key value is empty");
            return Err(AppError::bad_request(
                "Stored target is empty",
                json!({ "key": key }),
            ));
        }

        debug!(key = %key, target = %record.value, "Resolved key");
        Ok(record.value)
    }
}
