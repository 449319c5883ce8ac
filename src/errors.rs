use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for pyreadme
#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("Python parsing error: {message}{}", location_suffix(.line, .column))]
    ParseError {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },

    #[error("No Python source files found in {}", .0.display())]
    EmptyProject(PathBuf),

    #[error("No API key provided; set {0} or enter one at the prompt")]
    MissingCredential(&'static str),

    #[error("Text generation failed: {0}")]
    Collaborator(String),
}

/// Location information for errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: Option<usize>,
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at line {}", self.line)?;

        if let Some(column) = self.column {
            write!(f, ", column {}", column)?;
        }

        Ok(())
    }
}

impl ReadmeError {
    /// Where the error happened in the source, if known
    pub fn location(&self) -> Option<ErrorLocation> {
        match self {
            ReadmeError::ParseError {
                line: Some(line),
                column,
                ..
            } => Some(ErrorLocation {
                line: *line,
                column: *column,
            }),
            _ => None,
        }
    }
}

fn location_suffix(line: &Option<usize>, column: &Option<usize>) -> String {
    match line {
        Some(line) => format!(
            " ({})",
            ErrorLocation {
                line: *line,
                column: *column,
            }
        ),
        None => String::new(),
    }
}

/// Parse error
pub fn parse_error(
    message: impl Into<String>,
    line: Option<usize>,
    column: Option<usize>,
) -> ReadmeError {
    ReadmeError::ParseError {
        message: message.into(),
        line,
        column,
    }
}

/// Text generation (collaborator) error
pub fn collaborator_error(message: impl Into<String>) -> ReadmeError {
    ReadmeError::Collaborator(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_location() {
        let err = parse_error("unexpected token", Some(3), Some(7));
        assert_eq!(
            err.to_string(),
            "Python parsing error: unexpected token (at line 3, column 7)"
        );
        assert_eq!(
            err.location(),
            Some(ErrorLocation {
                line: 3,
                column: Some(7)
            })
        );
    }

    #[test]
    fn test_parse_error_without_location() {
        let err = parse_error("bad input", None, None);
        assert_eq!(err.to_string(), "Python parsing error: bad input");
        assert!(err.location().is_none());
    }
}
