//! Custom axum extractors.

pub mod json;
pub mod query;
