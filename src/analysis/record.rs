//! Extracted declaration records.

/// Description used when a declaration has neither a docstring nor comments
pub const PLACEHOLDER_DESCRIPTION: &str = "No docstring provided.";

/// Kind of extracted declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Class,
    Function,
}

/// One class or function declaration found in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationRecord {
    pub kind: DeclarationKind,
    /// Declared identifier
    pub name: String,
    /// Reconstructed `def name(a, b):` header; `None` for classes
    pub signature: Option<String>,
    /// Docstring, preceding comments, or the placeholder. Never empty.
    pub description: String,
    /// 1-based line of the `def`/`class` keyword
    pub line: usize,
}

impl DeclarationRecord {
    pub fn class(name: impl Into<String>, description: Option<String>, line: usize) -> Self {
        DeclarationRecord {
            kind: DeclarationKind::Class,
            name: name.into(),
            signature: None,
            description: description_or_placeholder(description),
            line,
        }
    }

    pub fn function(
        name: impl Into<String>,
        signature: String,
        description: Option<String>,
        line: usize,
    ) -> Self {
        DeclarationRecord {
            kind: DeclarationKind::Function,
            name: name.into(),
            signature: Some(signature),
            description: description_or_placeholder(description),
            line,
        }
    }

    pub fn is_class(&self) -> bool {
        self.kind == DeclarationKind::Class
    }
}

fn description_or_placeholder(description: Option<String>) -> String {
    description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| PLACEHOLDER_DESCRIPTION.to_string())
}
