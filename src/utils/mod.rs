//! Utility functions for key derivation, URL validation, and request handling.
//!
//! - [`checksum`] - Adler-32 checksum and short key derivation
//! - [`url_validator`] - Absolute URL validation
//! - [`link_host`] - Host extraction from HTTP headers

pub mod checksum;
pub mod link_host;
pub mod url_validator;
