//! HTTP API layer for request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Form and response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Rate limiting and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
