use anyhow::Result;
use clap::Parser;
use log::debug;
use pyreadme::core::options::{ExtractOptions, GeneratorOptions, Verbosity};
use pyreadme::utils::logging;
use pyreadme::DEFAULT_SUMMARY_THRESHOLD;
use std::path::PathBuf;

/// Generate a README.md for a Python file or project directory.
#[derive(Parser)]
#[command(name = "pyreadme", version)]
struct Args {
    /// Python file, or project directory to scan for *.py files
    path: PathBuf,
    /// Model name (defaults to $PYREADME_MODEL, then gemini-2.0-flash)
    #[arg(long)]
    model: Option<String>,
    /// Sources longer than this many characters are sent as a structural summary
    #[arg(long, default_value_t = DEFAULT_SUMMARY_THRESHOLD)]
    threshold: usize,
    /// Describe undocumented classes with the comments above them
    #[arg(long)]
    class_comments: bool,
    #[arg(long, short = 'q')]
    quiet: bool,
    #[arg(long, short = 'v')]
    verbose: bool,
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_flags(self.verbose, self.debug)
        }
    }

    fn generator_options(&self) -> GeneratorOptions {
        GeneratorOptions {
            summary_threshold: self.threshold,
            extract: ExtractOptions {
                class_comment_fallback: self.class_comments,
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbosity());

    let options = args.generator_options();
    debug!("Options: {:?}", options);

    let readme = pyreadme::generate_readme_with_options(&args.path, args.model, options)?;

    if logging::get_verbosity().is_normal() {
        println!("README written to {}", readme.display());
    }
    Ok(())
}
