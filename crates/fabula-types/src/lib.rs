//! Shared domain types for Fabula.
//!
//! This crate contains the core domain types used across the Fabula backend:
//! chat turns and session summaries, story records, LLM request/response
//! shapes, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
pub mod story;
