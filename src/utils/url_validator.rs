//! Validation of URLs submitted for shortening.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("missing url")]
    Missing,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must be absolute with a scheme and a host")]
    MissingHost,
}

/// Checks that `input` is a structurally valid absolute URL.
///
/// Surrounding whitespace is trimmed. The accepted URL is returned exactly as
/// submitted, without normalization, so the same input string always maps to
/// the same key. Because it is later sent back verbatim in a `Location`
/// header, it must not contain ASCII control characters, which `Url::parse`
/// would otherwise strip silently.
///
/// # Errors
///
/// - [`UrlValidationError::Missing`] for an empty input
/// - [`UrlValidationError::InvalidFormat`] if the input does not parse or
///   contains control characters such as tabs or newlines
/// - [`UrlValidationError::MissingHost`] for URLs without an authority,
///   such as `mailto:` links
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_absolute_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_absolute_url("not a url").is_err());
/// assert!(validate_absolute_url("mailto:me@example.com").is_err());
/// ```
pub fn validate_absolute_url(input: &str) -> Result<&str, UrlValidationError> {
    let candidate = input.trim();
    if candidate.is_empty() {
        return Err(UrlValidationError::Missing);
    }

    if candidate.bytes().any(|b| b.is_ascii_control()) {
        return Err(UrlValidationError::InvalidFormat(
            "control characters are not allowed".to_string(),
        ));
    }

    let url =
        Url::parse(candidate).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(candidate),
        _ => Err(UrlValidationError::MissingHost),
    }
}
