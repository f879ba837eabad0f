//! HTTP/REST API layer for Fabula.
//!
//! Axum-based JSON API for chat sessions and the story catalog, mounted at
//! the root and under `/api`, with CORS and request tracing.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
