//! DTOs for the link shortening endpoint.

use serde::Deserialize;

/// Query string of `GET /short`.
///
/// `url` is optional here so that a missing parameter reaches the service
/// and is reported like any other invalid input.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenQuery {
    pub url: Option<String>,
}
