//! Data Transfer Objects for requests and responses.
//!
//! Form input is deserialized with Serde and checked with `validator`
//! before it becomes a domain [`crate::domain::entities::GenerationRequest`].

pub mod generate;
pub mod health;
