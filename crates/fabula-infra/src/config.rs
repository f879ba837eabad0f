//! Application configuration loader for Fabula.
//!
//! Layers, lowest precedence first: built-in defaults, an optional TOML file
//! (`fabula.toml` in the working directory unless a path is given), then
//! `FABULA_*` environment variables. CLI flags are applied by the binary on
//! top of the result.

use std::path::{Path, PathBuf};

use fabula_core::chat::NarratorPrompt;
use fabula_types::config::AppConfig;
use fabula_types::error::ConfigError;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fabula.toml";

pub const ENV_HOST: &str = "FABULA_HOST";
pub const ENV_PORT: &str = "FABULA_PORT";
pub const ENV_MODEL: &str = "FABULA_MODEL";
pub const ENV_GENERATION_TIMEOUT_SECS: &str = "FABULA_GENERATION_TIMEOUT_SECS";

/// Load configuration from `path` (or [`DEFAULT_CONFIG_FILE`]) and the
/// process environment.
///
/// - A missing file yields the defaults.
/// - A file that exists but fails to read or parse is an error.
/// - The narrator prompt is validated before returning.
pub async fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    let mut config = read_config_file(&path).await?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    validate(&config)?;
    Ok(config)
}

async fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        Err(err) => {
            return Err(ConfigError::Invalid(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };

    let config = toml::from_str::<AppConfig>(&content)
        .map_err(|err| ConfigError::Invalid(format!("failed to parse {}: {err}", path.display())))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Apply `FABULA_*` overrides. `lookup` abstracts the environment for tests.
pub fn apply_env_overrides(
    config: &mut AppConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<(), ConfigError> {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(host) = get(ENV_HOST) {
        config.host = host;
    }
    if let Some(port) = get(ENV_PORT) {
        config.port = parse_var(ENV_PORT, &port)?;
    }
    if let Some(model) = get(ENV_MODEL) {
        config.model = model;
    }
    if let Some(secs) = get(ENV_GENERATION_TIMEOUT_SECS) {
        config.generation_timeout_secs = parse_var(ENV_GENERATION_TIMEOUT_SECS, &secs)?;
    }
    Ok(())
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::Invalid(format!("{key}={value:?}: {e}")))
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.generation_timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "generation_timeout_secs must be greater than zero".to_string(),
        ));
    }
    if config.model.trim().is_empty() {
        return Err(ConfigError::Invalid("model must not be empty".to_string()));
    }
    NarratorPrompt::new(config.narrator_prompt.clone())?;
    Ok(())
}
