//! File reading utilities

use anyhow::{Context, Result};
use lexis_core::PreprocessedDocument;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Digits directly before the file extension
static DOCUMENT_NUMBER: OnceLock<Regex> = OnceLock::new();

/// File reader for preprocessed documents
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read and parse a preprocessed document from JSON
    ///
    /// A document without an `id` gets one derived from its file name.
    pub fn read_document(path: &Path) -> Result<PreprocessedDocument> {
        let content = Self::read_text(path)?;
        let mut document: PreprocessedDocument = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse document: {}", path.display()))?;

        if document.id.is_none() {
            document.id = Some(document_id_from_path(path));
        }

        Ok(document)
    }
}

/// Derive a document identifier from a file name
///
/// `essay_0042.json` gives `0042`. Names without trailing digits fall back
/// to the file stem.
pub fn document_id_from_path(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();

    let pattern = DOCUMENT_NUMBER
        .get_or_init(|| Regex::new(r"(\d+)\.[^.]+$").expect("document number pattern is valid"));

    if let Some(captures) = pattern.captures(&file_name) {
        return captures[1].to_string();
    }

    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_name.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const DOCUMENT: &str = r#"{
        "sentences": ["Ich bleibe zu Hause, weil es regnet."],
        "words": ["Ich", "bleibe", "zu", "Hause", "weil", "es", "regnet"],
        "tokens": [
            {"lemma": "ich", "pos": "PRON"},
            {"lemma": "bleiben", "pos": "VERB"},
            {"lemma": "zu", "pos": "ADP"},
            {"lemma": "haus", "pos": "NOUN"},
            {"lemma": "weil", "pos": "SCONJ"},
            {"lemma": "es", "pos": "PRON"},
            {"lemma": "regnen", "pos": "VERB"}
        ]
    }"#;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "Hallo Welt!\nDas ist ein Test.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.json");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_document_assigns_id() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("essay_0042.json");
        fs::write(&file_path, DOCUMENT).unwrap();

        let document = FileReader::read_document(&file_path).unwrap();
        assert_eq!(document.id.as_deref(), Some("0042"));
        assert_eq!(document.tokens.len(), 7);
        assert_eq!(document.words.len(), 7);
    }

    #[test]
    fn test_read_document_keeps_explicit_id() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("essay_7.json");
        let content = DOCUMENT.replacen('{', r#"{"id": "custom","#, 1);
        fs::write(&file_path, content).unwrap();

        let document = FileReader::read_document(&file_path).unwrap();
        assert_eq!(document.id.as_deref(), Some("custom"));
    }

    #[test]
    fn test_read_document_unknown_pos() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("bad.json");
        fs::write(
            &file_path,
            r#"{"sentences": [], "words": ["x"], "tokens": [{"lemma": "x", "pos": "WORD"}]}"#,
        )
        .unwrap();

        let err = FileReader::read_document(&file_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse document"));
    }

    #[test]
    fn test_document_id_from_path() {
        assert_eq!(document_id_from_path(&PathBuf::from("essay_0042.json")), "0042");
        assert_eq!(document_id_from_path(&PathBuf::from("dir/17.json")), "17");
        assert_eq!(document_id_from_path(&PathBuf::from("text12b.json")), "text12b");
        assert_eq!(document_id_from_path(&PathBuf::from("notes.json")), "notes");
        assert_eq!(document_id_from_path(&PathBuf::from("v2.final.json")), "v2.final");
    }
}
