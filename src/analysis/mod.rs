//! Structural analysis of Python source for README prompts.

pub mod comments;
pub mod declaration;
pub mod extractor;
pub mod record;
pub mod signature;
pub mod summary;

pub use comments::scan_preceding_comments;
pub use declaration::Declaration;
pub use extractor::{extract, extract_function, extract_with_options};
pub use record::{DeclarationKind, DeclarationRecord, PLACEHOLDER_DESCRIPTION};
pub use signature::format_signature;
pub use summary::serialize;
