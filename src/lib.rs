pub mod analysis;
pub mod core;
pub mod errors;
pub mod generator;
pub mod llm;
pub mod payload;
pub mod utils;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use analysis::{
    extract, extract_function, extract_with_options, format_signature, scan_preceding_comments,
    serialize, Declaration, DeclarationKind, DeclarationRecord, PLACEHOLDER_DESCRIPTION,
};
pub use crate::core::{
    ExtractOptions, GeneratorConfig, GeneratorOptions, Verbosity, DEFAULT_SUMMARY_THRESHOLD,
};
pub use errors::ReadmeError;
pub use generator::{ReadmeGenerator, README_FILE_NAME};
pub use llm::{build_messages, ChatMessage, ChatRole, GeminiClient, TextGenerator};
pub use payload::{prepare_payload, prepare_payload_with, Payload, PayloadMode};

/// Generate `README.md` for a Python file or project directory using Gemini.
///
/// The API key comes from `GOOGLE_API_KEY`, or from a terminal prompt when it
/// is unset.
pub fn generate_readme<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    generate_readme_with_options(path, None, GeneratorOptions::default())
}

/// Generate `README.md` with an explicit model and options
pub fn generate_readme_with_options<P: AsRef<Path>>(
    path: P,
    model: Option<String>,
    options: GeneratorOptions,
) -> Result<PathBuf> {
    let config = GeneratorConfig::resolve(model)?;
    let client = GeminiClient::new(config)?;
    ReadmeGenerator::new(client, options).generate_for_path(path.as_ref())
}
