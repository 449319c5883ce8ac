//! File system utilities for working with Python files.

use crate::errors::ReadmeError;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Directories never scanned for sources
const EXCLUDE_DIRS: &[&str] = &[
    "venv",
    "env",
    "__pycache__",
    "node_modules",
    "site-packages",
    "dist",
    "build",
];

/// A Python file collected from a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the project root
    pub relative_path: String,
    pub content: String,
}

/// Read a single Python file
pub fn read_source_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read Python file: {}", path.display()))
}

/// Collect every `.py` file below `dir`, sorted by relative path.
///
/// # Errors
///
/// Fails on the first unreadable entry, or with
/// [`ReadmeError::EmptyProject`] when no Python file exists.
pub fn collect_project_sources(dir: &Path) -> Result<Vec<SourceFile>> {
    if !dir.is_dir() {
        anyhow::bail!(
            "Project directory does not exist or is not a directory: {}",
            dir.display()
        );
    }

    let mut files = Vec::new();
    collect_python_files_recursive(dir, dir, &mut files)?;

    if files.is_empty() {
        return Err(ReadmeError::EmptyProject(dir.to_path_buf()).into());
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    debug!("Collected {} Python files from {}", files.len(), dir.display());
    Ok(files)
}

/// Recursively collect Python files from a directory
fn collect_python_files_recursive(
    root_dir: &Path,
    current_dir: &Path,
    files: &mut Vec<SourceFile>,
) -> Result<()> {
    let entries = fs::read_dir(current_dir)
        .with_context(|| format!("Failed to read directory: {}", current_dir.display()))?;

    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            let skip = path
                .file_name()
                .map(|name| should_skip_directory(&name.to_string_lossy()))
                .unwrap_or(false);
            if skip {
                debug!("Skipping directory {}", path.display());
                continue;
            }

            collect_python_files_recursive(root_dir, &path, files)?;
        } else if path.is_file() && path.extension().is_some_and(|ext| ext == "py") {
            let content = read_source_file(&path)?;
            let relative_path = path
                .strip_prefix(root_dir)
                .unwrap_or(&path)
                .to_string_lossy()
                .to_string();

            files.push(SourceFile {
                relative_path,
                content,
            });
        }
    }

    Ok(())
}

/// Check if a directory should be skipped during scanning
pub fn should_skip_directory(dir_name: &str) -> bool {
    dir_name.starts_with('.') || EXCLUDE_DIRS.contains(&dir_name)
}

/// Join file contents into one text. Each file gets a `# file: <path>`
/// header followed by a blank line, so a comment block at the end of one file
/// is never read as the description of a declaration in the next.
pub fn concatenate_sources(files: &[SourceFile]) -> String {
    let mut output = String::new();
    for file in files {
        output.push_str("# file: ");
        output.push_str(&file.relative_path);
        output.push_str("\n\n");
        output.push_str(&file.content);
        if !file.content.is_empty() && !file.content.ends_with('\n') {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collect_project_sources_sorted_and_filtered() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("pkg")).unwrap();
        fs::create_dir_all(root.join("venv/lib")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("main.py"), "def main():\n    pass\n").unwrap();
        fs::write(root.join("pkg/util.py"), "X = 1").unwrap();
        fs::write(root.join("notes.txt"), "not python").unwrap();
        fs::write(root.join("venv/lib/site.py"), "ignored = True\n").unwrap();
        fs::write(root.join(".git/hook.py"), "ignored = True\n").unwrap();

        let files = collect_project_sources(root).unwrap();
        let paths: Vec<&str> = files.iter().map(|f| f.relative_path.as_str()).collect();
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0], "main.py");
        assert!(paths[1].ends_with("util.py"));

        assert_eq!(
            concatenate_sources(&files),
            format!(
                "# file: main.py\n\ndef main():\n    pass\n# file: {}\n\nX = 1\n",
                paths[1]
            )
        );
    }

    #[test]
    fn test_trailing_comment_stays_in_its_file() {
        let files = vec![
            SourceFile {
                relative_path: "a.py".to_string(),
                content: "CONFIG = {}\n# trailing note about config in a.py\n".to_string(),
            },
            SourceFile {
                relative_path: "b.py".to_string(),
                content: "def run():\n    pass\n".to_string(),
            },
        ];

        let records = crate::analysis::extract(&concatenate_sources(&files)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "run");
        assert_eq!(records[0].description, crate::analysis::PLACEHOLDER_DESCRIPTION);
    }

    #[test]
    fn test_empty_project_is_an_error() {
        let dir = tempdir().unwrap();
        let err = collect_project_sources(dir.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReadmeError>(),
            Some(ReadmeError::EmptyProject(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(read_source_file(&dir.path().join("missing.py")).is_err());
    }

    #[test]
    fn test_should_skip_directory() {
        assert!(should_skip_directory("__pycache__"));
        assert!(should_skip_directory(".venv"));
        assert!(should_skip_directory("node_modules"));
        assert!(!should_skip_directory("src"));
    }
}
