//! Generator options and configuration.

use log::LevelFilter;

/// Inputs longer than this many characters are summarized before being sent
/// to the model.
pub const DEFAULT_SUMMARY_THRESHOLD: usize = 4000;

/// Output verbosity, ordered from least to most chatty
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Derive the verbosity from `--verbose` / `--debug` flags
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_debug(self) -> bool {
        self >= Verbosity::Debug
    }

    pub fn is_verbose(self) -> bool {
        self >= Verbosity::Verbose
    }

    pub fn is_normal(self) -> bool {
        self >= Verbosity::Normal
    }

    /// The `log` level filter matching this verbosity
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::Error,
            Verbosity::Normal => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
            Verbosity::Debug => LevelFilter::Trace,
        }
    }
}

/// Options controlling structure extraction
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Fall back to the comment lines above a class when it has no docstring
    pub class_comment_fallback: bool,
}

/// Options for README generation
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Character count above which the source is replaced by its structural summary
    pub summary_threshold: usize,

    /// Structure extraction options
    pub extract: ExtractOptions,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            summary_threshold: DEFAULT_SUMMARY_THRESHOLD,
            extract: ExtractOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(true, false), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Debug);
    }

    #[test]
    fn test_verbosity_levels() {
        assert!(Verbosity::Debug.is_debug());
        assert!(Verbosity::Debug.is_verbose());
        assert!(!Verbosity::Verbose.is_debug());
        assert!(Verbosity::Normal.is_normal());
        assert!(!Verbosity::Quiet.is_normal());
        assert_eq!(Verbosity::Quiet.level_filter(), LevelFilter::Error);
        assert_eq!(Verbosity::Verbose.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_default_options() {
        let options = GeneratorOptions::default();
        assert_eq!(options.summary_threshold, 4000);
        assert!(!options.extract.class_comment_fallback);
    }
}
