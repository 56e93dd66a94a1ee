//! HTTP API layer for both services.
//!
//! This layer translates HTTP requests into engine calls (storage facade) or
//! service calls (shortener) and formats responses according to each
//! service's contract.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and metrics middleware
//! - [`routes`] - Route tables of each service

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
