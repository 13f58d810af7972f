//! Connector lexicon and basic vocabulary tables
//!
//! Lexicons are plain TOML data. The German lexicon is embedded; others can
//! be loaded from disk. Every lexicon is validated when it is built, so an
//! ambiguous surface form never reaches classification.

pub mod config;
pub(crate) mod loader;
mod table;

pub use config::LexiconConfig;
pub use loader::{get_lexicon, list_available_lexicons};
pub use table::{ConnectorEntry, Lexicon};
