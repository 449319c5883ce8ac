//! Collaborator configuration, resolved once at startup.

use crate::errors::ReadmeError;
use anyhow::{Context, Result};
use console::Term;
use std::env;
use std::fmt;

/// Environment variable holding the Google API key
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "PYREADME_MODEL";

/// Model used when neither the CLI nor the environment names one
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Base URL of the Generative Language API
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for the text-generation collaborator. Never mutated after
/// construction; the API key is never written back into the environment.
#[derive(Clone)]
pub struct GeneratorConfig {
    pub api_key: String,
    pub model: String,
    pub endpoint: String,
}

impl fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GeneratorConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Resolve the configuration from the process environment, prompting for
    /// the API key on the terminal when it is not set.
    pub fn resolve(model_override: Option<String>) -> Result<Self> {
        let api_key = resolve_api_key(env::var(API_KEY_VAR).ok(), prompt_api_key)?;
        let model = resolve_model(model_override, env::var(MODEL_VAR).ok());
        Ok(Self::new(api_key, model))
    }
}

/// Pick the API key from the environment value, falling back to `prompt`.
/// Blank values count as missing.
pub fn resolve_api_key<F>(from_env: Option<String>, prompt: F) -> Result<String>
where
    F: FnOnce() -> Result<String>,
{
    if let Some(key) = from_env.filter(|k| !k.trim().is_empty()) {
        return Ok(key.trim().to_string());
    }

    let key = prompt()?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ReadmeError::MissingCredential(API_KEY_VAR).into());
    }
    Ok(key.to_string())
}

/// CLI override first, then the environment, then the default model
pub fn resolve_model(cli: Option<String>, from_env: Option<String>) -> String {
    cli.or(from_env)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

fn prompt_api_key() -> Result<String> {
    let term = Term::stderr();
    term.write_str("Provide your Google API Key: ")
        .context("Failed to write API key prompt")?;
    term.read_secure_line()
        .context("Failed to read API key from terminal")
}
