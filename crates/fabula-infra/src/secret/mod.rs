//! Credential providers.
//!
//! - `env`: environment variable lookup (with optional `.env` seeding)

pub mod env;

pub use env::{api_key_from_env, load_dotenv, GEMINI_API_KEY_VAR};
