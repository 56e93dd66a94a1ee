//! Core domain entities.
//!
//! - [`Record`] - A short key mapped to the original URL
//! - [`StatusMessage`] - The facade's `{message, status}` envelope

pub mod record;
pub mod status_message;

pub use record::{REDIRECT_PREFIX, Record};
pub use status_message::StatusMessage;
