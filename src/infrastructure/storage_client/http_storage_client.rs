//! HTTP implementation of the storage client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{Record, StatusMessage};
use crate::domain::repositories::{StorageClient, StorageError};

/// Settings for [`HttpStorageClient`].
#[derive(Debug, Clone)]
pub struct HttpStorageClientConfig {
    /// Base address of the storage facade, e.g. `http://localhost:8080`.
    pub base_url: String,
    /// Path of the write endpoint (`POST`).
    pub set_path: String,
    /// Path prefix of the read endpoint (`GET <prefix><key>`).
    pub get_path: String,
    /// Upper bound for each call, connect included.
    pub timeout: Duration,
    /// Accept invalid TLS certificates. Development only.
    pub accept_invalid_certs: bool,
}

impl Default for HttpStorageClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            set_path: "/set-key".to_string(),
            get_path: "/get-key/".to_string(),
            timeout: Duration::from_secs(1),
            accept_invalid_certs: false,
        }
    }
}

/// Body returned by `GET <get_path><key>`.
///
/// A hit is a [`Record`]; anything else is a status envelope. Older facades
/// answer a miss with HTTP 200 and `{"message":"Key not found","status":404}`,
/// so the envelope is checked as well as the HTTP status.
#[derive(Deserialize)]
#[serde(untagged)]
enum GetKeyReply {
    Hit(Record),
    Status(StatusMessage),
}

/// Storage client talking to the facade over HTTP.
///
/// One `reqwest::Client` is shared by all calls. Each call is bounded by the
/// configured timeout and never retried.
pub struct HttpStorageClient {
    client: Client,
    set_url: Url,
    get_url: Url,
    ping_url: Url,
}

impl HttpStorageClient {
    /// Builds a client from its settings.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Configuration`] if the base address or paths do
    /// not form valid HTTP URLs, or the TLS backend cannot be initialized.
    pub fn new(config: &HttpStorageClientConfig) -> Result<Self, StorageError> {
        let base = config.base_url.trim_end_matches('/');

        let set_url = parse_endpoint(base, &config.set_path)?;
        let get_url = parse_endpoint(base, &config.get_path)?;
        let ping_url = parse_endpoint(base, "/ping")?;

        if get_url.cannot_be_a_base() {
            return Err(StorageError::Configuration(format!(
                "get endpoint '{}' cannot carry a key",
                get_url
            )));
        }

        if config.accept_invalid_certs {
            warn!("TLS certificate verification is DISABLED for the storage client");
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| {
                StorageError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            set_url,
            get_url,
            ping_url,
        })
    }

    /// Builds `<get_path><key>` with the key percent-encoded as one segment.
    fn key_url(&self, key: &str) -> Result<Url, StorageError> {
        let mut url = self.get_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                StorageError::Configuration("get endpoint cannot carry a key".to_string())
            })?
            .pop_if_empty()
            .push(key);
        Ok(url)
    }
}

fn parse_endpoint(base: &str, path: &str) -> Result<Url, StorageError> {
    let url = Url::parse(&format!("{}{}", base, path)).map_err(|e| {
        StorageError::Configuration(format!("invalid endpoint '{}{}': {}", base, path, e))
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(StorageError::Configuration(format!(
            "unsupported scheme '{}'",
            other
        ))),
    }
}

fn transport_error(operation: &str, key: &str, e: reqwest::Error) -> StorageError {
    warn!(operation, key = %key, timeout = e.is_timeout(), "Storage call failed: {}", e);
    StorageError::Transport(e.to_string())
}

#[async_trait]
impl StorageClient for HttpStorageClient {
    async fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let record = Record::new(key, value);

        let response = self
            .client
            .post(self.set_url.clone())
            .json(&record)
            .send()
            .await
            .map_err(|e| transport_error("store", key, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(key = %key, status = status.as_u16(), "Storage rejected write");
            return Err(StorageError::Persist {
                status: status.as_u16(),
            });
        }

        // Older facades always answer 200 and report failures in the envelope.
        match response.json::<StatusMessage>().await {
            Ok(envelope) if !envelope.is_ok() => {
                warn!(key = %key, status = envelope.status, "Storage rejected write: {}", envelope.message);
                Err(StorageError::Persist {
                    status: envelope.status,
                })
            }
            Ok(_) => {
                debug!(key = %key, "Stored record");
                Ok(())
            }
            Err(e) => {
                debug!(key = %key, "Write acknowledged without envelope: {}", e);
                Ok(())
            }
        }
    }

    async fn fetch(&self, key: &str) -> Result<Record, StorageError> {
        let url = self.key_url(key)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error("fetch", key, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error("fetch", key, e))?;

        // A bare 404 comes from a router without the get route, not from a miss.
        if status == StatusCode::NOT_FOUND {
            return match serde_json::from_slice::<StatusMessage>(&body) {
                Ok(envelope) if envelope.is_not_found() => Err(StorageError::NotFound {
                    key: key.to_string(),
                }),
                _ => {
                    warn!(key = %key, "Storage answered 404 without a miss envelope");
                    Err(StorageError::Upstream {
                        status: status.as_u16(),
                    })
                }
            };
        }
        if !status.is_success() {
            warn!(key = %key, status = status.as_u16(), "Storage read failed");
            return Err(StorageError::Upstream {
                status: status.as_u16(),
            });
        }

        let reply = serde_json::from_slice::<GetKeyReply>(&body).map_err(|e| {
            warn!(key = %key, "Undecodable storage response: {}", e);
            StorageError::Decode(e.to_string())
        })?;

        match reply {
            GetKeyReply::Hit(record) => {
                debug!(key = %key, "Fetched record");
                Ok(record)
            }
            GetKeyReply::Status(envelope) if envelope.is_not_found() => {
                Err(StorageError::NotFound {
                    key: key.to_string(),
                })
            }
            GetKeyReply::Status(envelope) => {
                warn!(key = %key, status = envelope.status, "Storage read failed: {}", envelope.message);
                Err(StorageError::Upstream {
                    status: envelope.status,
                })
            }
        }
    }

    async fn ping(&self) -> Result<String, StorageError> {
        let response = self
            .client
            .get(self.ping_url.clone())
            .send()
            .await
            .map_err(|e| transport_error("ping", "-", e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Upstream {
                status: status.as_u16(),
            });
        }

        let envelope = response
            .json::<StatusMessage>()
            .await
            .map_err(|e| StorageError::Decode(e.to_string()))?;

        Ok(envelope.message)
    }
}
