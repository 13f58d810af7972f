//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::{document_id_from_path, FileReader};
pub use glob_resolver::resolve_patterns;
