//! Utility modules for pyreadme.

pub mod fs;
pub mod logging;

pub use fs::{collect_project_sources, concatenate_sources, read_source_file, SourceFile};
