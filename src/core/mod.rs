//! Core functionality for pyreadme: parsing, source indexing and options.

pub mod config;
pub mod options;
pub mod parser;
pub mod source;

pub use config::*;
pub use options::*;
pub use source::SourceText;
