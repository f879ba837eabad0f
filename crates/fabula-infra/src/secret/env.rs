//! Environment variable credential lookup.
//!
//! The generation provider needs one API key, read from the process
//! environment (optionally seeded from a `.env` file). A missing or empty key
//! is a fatal [`ConfigError`]; the server must not start without it.

use std::path::PathBuf;

use secrecy::SecretString;

use fabula_types::error::ConfigError;

/// Variable holding the Gemini API key.
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Substrings of variable names worth listing when the key is missing.
const RELATED_MARKERS: [&str; 3] = ["GEMINI", "API", "RAILWAY"];

/// Load `.env` from the working directory if there is one.
///
/// Existing environment variables win over `.env` entries. Returns the path
/// that was loaded, or `None` when there is no `.env` file. Runs before the
/// tracing subscriber exists, so reporting is left to the caller.
pub fn load_dotenv() -> Result<Option<PathBuf>, ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(ConfigError::Invalid(format!("failed to load .env: {e}"))),
    }
}

/// Read the API key named `var` from the process environment.
pub fn api_key_from_env(var: &str) -> Result<SecretString, ConfigError> {
    let vars = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    resolve_api_key(var, vars)
}

fn resolve_api_key(
    var: &str,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<SecretString, ConfigError> {
    let vars: Vec<(String, String)> = vars.into_iter().collect();

    if let Some((_, value)) = vars.iter().find(|(k, v)| k == var && !v.trim().is_empty()) {
        return Ok(SecretString::from(value.trim().to_string()));
    }

    // Names only; values never leave this function.
    let related = related_variable_names(&vars);
    tracing::debug!(?related, "{var} not set; related environment variables listed");

    Err(ConfigError::MissingCredential(var.to_string()))
}

fn related_variable_names(vars: &[(String, String)]) -> Vec<String> {
    let mut names: Vec<String> = vars
        .iter()
        .map(|(k, _)| k)
        .filter(|k| RELATED_MARKERS.iter().any(|m| k.contains(m)))
        .cloned()
        .collect();
    names.sort();
    names
}
