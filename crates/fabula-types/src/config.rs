//! Application configuration types for Fabula.
//!
//! `AppConfig` represents the optional `fabula.toml` plus environment and CLI
//! overrides. All fields have defaults so an empty file is valid.

use serde::{Deserialize, Serialize};

/// Placeholder substituted into the narrator template.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

/// Default narrator instruction. `{context}` is replaced with either the
/// caller's initial context line or a request for a fresh introduction.
pub const DEFAULT_NARRATOR_PROMPT: &str = "Você é um narrador mestre especializado em ficção interativa. Sua função é criar e conduzir narrativas envolventes e imersivas.

Diretrizes:
- Seja criativo, descritivo e imaginativo
- Adapte-se ao tom e gênero da história
- Responda às ações do usuário de forma coerente e interessante
- Mantenha a narrativa fluindo naturalmente
- Ofereça escolhas e possibilidades interessantes
- Use linguagem rica e evocativa
- Seja flexível e aceite ações inesperadas dos usuários

{context}

Comece a narrativa agora:";

/// Top-level configuration for the Fabula server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Generative model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on a single generation call, in seconds.
    #[serde(default = "default_generation_timeout_secs")]
    pub generation_timeout_secs: u64,

    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,

    #[serde(default)]
    pub temperature: Option<f64>,

    /// Bridge tracing spans to OpenTelemetry (stdout exporter).
    #[serde(default)]
    pub otel: bool,

    /// Narrator system prompt; must contain exactly one `{context}`.
    #[serde(default = "default_narrator_prompt")]
    pub narrator_prompt: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_generation_timeout_secs() -> u64 {
    60
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_narrator_prompt() -> String {
    DEFAULT_NARRATOR_PROMPT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            model: default_model(),
            generation_timeout_secs: default_generation_timeout_secs(),
            max_output_tokens: default_max_output_tokens(),
            temperature: None,
            otel: false,
            narrator_prompt: default_narrator_prompt(),
        }
    }
}
