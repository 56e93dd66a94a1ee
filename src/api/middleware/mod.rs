//! HTTP middleware layered around the handlers.
//!
//! Provides request tracing and metrics recording. Neither changes handler
//! behavior; both can be left out of a router.

pub mod metrics;
pub mod tracing;
