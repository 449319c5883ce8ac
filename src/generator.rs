//! End-to-end README generation: collect sources, prepare the payload, ask
//! the model, write `README.md`.

use crate::core::options::GeneratorOptions;
use crate::llm::{build_messages, TextGenerator};
use crate::payload::{prepare_payload_with, PayloadMode};
use crate::utils::fs::{collect_project_sources, concatenate_sources, read_source_file};
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the generated file
pub const README_FILE_NAME: &str = "README.md";

/// Drives one README generation run against a text generator
pub struct ReadmeGenerator<G> {
    generator: G,
    options: GeneratorOptions,
}

impl<G: TextGenerator> ReadmeGenerator<G> {
    pub fn new(generator: G, options: GeneratorOptions) -> Self {
        Self { generator, options }
    }

    /// Generate for a file or a project directory, depending on `path`
    pub fn generate_for_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_dir() {
            self.generate_for_project(path)
        } else {
            self.generate_for_file(path)
        }
    }

    /// Generate a README for one Python file, written next to it
    pub fn generate_for_file(&self, file: &Path) -> Result<PathBuf> {
        let source = read_source_file(file)?;
        info!("Read {} ({} chars)", file.display(), source.chars().count());

        let dir = file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        self.generate(&source, dir)
    }

    /// Generate a README for every Python file below `dir`, written inside it
    pub fn generate_for_project(&self, dir: &Path) -> Result<PathBuf> {
        let files = collect_project_sources(dir)?;
        info!("Found {} Python files in {}", files.len(), dir.display());

        let source = concatenate_sources(&files);
        self.generate(&source, dir)
    }

    /// Generated text is written only once the model has answered, so a failed
    /// run leaves any existing README untouched.
    fn generate(&self, source: &str, output_dir: &Path) -> Result<PathBuf> {
        let payload = prepare_payload_with(source, &self.options)?;
        if payload.mode == PayloadMode::Summarized {
            info!("Sending structural summary instead of full source");
        }

        let messages = build_messages(&payload.text);
        let readme = self
            .generator
            .generate(&messages)
            .context("Failed to generate README text")?;

        let readme_path = output_dir.join(README_FILE_NAME);
        fs::write(&readme_path, readme)
            .with_context(|| format!("Failed to write {}", readme_path.display()))?;
        info!("Wrote {}", readme_path.display());

        Ok(readme_path)
    }
}
