//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to actual file paths
///
/// A pattern naming a directory expands to the `*.json` files inside it.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let pattern = if PathBuf::from(pattern).is_dir() {
            format!("{}/*.json", pattern.trim_end_matches('/'))
        } else {
            pattern.clone()
        };

        let paths = glob(&pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    // Remove duplicates and sort
    files.sort();
    files.dedup();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_directory_expands_to_json_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("b_2.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("a_1.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "").unwrap();

        let files = resolve_patterns(&[temp_dir.path().display().to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a_1.json", "b_2.json"]);
    }

    #[test]
    fn test_overlapping_patterns_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("essay_1.json"), "{}").unwrap();
        let base = temp_dir.path().display().to_string();

        let files =
            resolve_patterns(&[format!("{base}/*.json"), format!("{base}/essay_*.json")]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_no_match_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.json", temp_dir.path().display());

        let err = resolve_patterns(&[pattern]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern: [invalid"));
    }
}
