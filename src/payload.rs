//! Size-gated preparation of the text sent to the model.

use crate::analysis::{extract_with_options, serialize};
use crate::core::options::GeneratorOptions;
use anyhow::{Context, Result};
use log::{debug, info};

/// How the payload was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadMode {
    /// The input text, unchanged
    Raw,
    /// The structural summary of the input
    Summarized,
}

/// Text handed to the text-generation collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub text: String,
    pub mode: PayloadMode,
}

/// Prepare the payload with the default 4000 character threshold
pub fn prepare_payload(raw_text: &str) -> Result<String> {
    prepare_payload_with(raw_text, &GeneratorOptions::default()).map(|payload| payload.text)
}

/// Return `raw_text` untouched when it is at most `summary_threshold`
/// characters long, its extracted structure otherwise.
///
/// # Errors
///
/// Fails when the text has to be summarized and is not valid Python
pub fn prepare_payload_with(raw_text: &str, options: &GeneratorOptions) -> Result<Payload> {
    let length = raw_text.chars().count();

    if length <= options.summary_threshold {
        debug!(
            "Source is {} chars (threshold {}), sending it unchanged",
            length, options.summary_threshold
        );
        return Ok(Payload {
            text: raw_text.to_string(),
            mode: PayloadMode::Raw,
        });
    }

    let records = extract_with_options(raw_text, &options.extract)
        .context("Failed to extract structure from Python source")?;
    let text = serialize(&records);

    info!(
        "Source is {} chars, summarized {} declarations into {} chars",
        length,
        records.len(),
        text.chars().count()
    );

    Ok(Payload {
        text,
        mode: PayloadMode::Summarized,
    })
}
