//! Short link creation service.

use std::sync::Arc;

use serde_json::json;
use tracing::{error, info};

use crate::domain::entities::REDIRECT_PREFIX;
use crate::domain::repositories::StorageClient;
use crate::error::AppError;
use crate::utils::checksum::hash_url;
use crate::utils::url_validator::validate_absolute_url;

/// Service turning long URLs into checksum-keyed short links.
///
/// There is no existence check: shortening the same URL twice rewrites the
/// same record with identical content, and a colliding URL overwrites the
/// earlier one.
pub struct ShortenService {
    storage: Arc<dyn StorageClient>,
}

impl ShortenService {
    pub fn new(storage: Arc<dyn StorageClient>) -> Self {
        Self { storage }
    }

    /// Validates `raw_url`, stores it under its checksum and returns the short link.
    ///
    /// The link is `<link_host>/r/<key>`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or not an
    /// absolute URL; no storage call is made in that case.
    ///
    /// Returns [`AppError::Unavailable`] if the record cannot be stored.
    pub async fn shorten(&self, raw_url: &str, link_host: &str) -> Result<String, AppError> {
        let url = validate_absolute_url(raw_url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": raw_url }))
        })?;

        let key = hash_url(url);

        if let Err(e) = self.storage.store(&key, url).await {
            error!(key = %key, url = %url, "Failed to store record: {}", e);
            return Err(AppError::unavailable(
                "Could not contact backing storage service",
                json!({ "key": key, "reason": e.to_string() }),
            ));
        }

        info!(key = %key, url = %url, "Shortened URL");

        Ok(format!(
            "{}/{}/{}",
            link_host.trim_end_matches('/'),
            REDIRECT_PREFIX,
            key
        ))
    }
}
