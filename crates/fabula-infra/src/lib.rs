//! Infrastructure layer for Fabula.
//!
//! Contains the concrete Gemini implementation of the `LlmProvider` trait
//! defined in `fabula-core`, the TOML/environment configuration loader, and
//! environment-based credential lookup.

pub mod config;
pub mod llm;
pub mod secret;
