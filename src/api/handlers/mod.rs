//! HTTP request handlers for API endpoints.
//!
//! Storage facade: [`set_key`], [`get_key`], [`ping`].
//! Shortener: [`shorten`], [`redirect`], [`health`].

pub mod get_key;
pub mod health;
pub mod ping;
pub mod redirect;
pub mod set_key;
pub mod shorten;

pub use get_key::get_key_handler;
pub use health::health_handler;
pub use ping::ping_handler;
pub use redirect::redirect_handler;
pub use set_key::set_key_handler;
pub use shorten::shorten_handler;
