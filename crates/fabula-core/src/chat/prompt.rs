//! Narrator prompt template.
//!
//! The opening turn of every session is a fixed storytelling instruction with
//! a single `{context}` substitution point.

use fabula_types::config::CONTEXT_PLACEHOLDER;
use fabula_types::error::ConfigError;

/// Line used in place of `{context}` when the caller gives no context.
const NO_CONTEXT_LINE: &str = "Crie uma introdução envolvente para uma nova aventura.";

/// Validated narrator template.
#[derive(Debug, Clone)]
pub struct NarratorPrompt {
    template: String,
}

impl NarratorPrompt {
    /// Accept a template containing exactly one `{context}` placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self, ConfigError> {
        let template = template.into();
        match template.matches(CONTEXT_PLACEHOLDER).count() {
            1 => Ok(Self { template }),
            n => Err(ConfigError::Invalid(format!(
                "narrator prompt must contain exactly one {CONTEXT_PLACEHOLDER} placeholder, found {n}"
            ))),
        }
    }

    /// Render the opening instruction. Blank context counts as absent.
    pub fn render(&self, context: Option<&str>) -> String {
        let line = match context.map(str::trim).filter(|c| !c.is_empty()) {
            Some(ctx) => format!("Contexto inicial: {ctx}"),
            None => NO_CONTEXT_LINE.to_string(),
        };
        self.template.replacen(CONTEXT_PLACEHOLDER, &line, 1)
    }
}

impl Default for NarratorPrompt {
    fn default() -> Self {
        Self {
            template: fabula_types::config::DEFAULT_NARRATOR_PROMPT.to_string(),
        }
    }
}
