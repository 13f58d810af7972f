//! Embedded lexicon registry
//!
//! Lexicons compiled into the binary are parsed once on first access and
//! shared through `Arc` afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::LexiconError;
use crate::lexicon::table::Lexicon;

static EMBEDDED: OnceLock<HashMap<&'static str, Arc<Lexicon>>> = OnceLock::new();

macro_rules! embed_lexicon {
    ($code:expr, $alias:expr, $path:expr) => {
        ($code, $alias, include_str!($path))
    };
}

fn load_embedded_lexicons() -> HashMap<&'static str, Arc<Lexicon>> {
    let mut map = HashMap::new();

    let embedded = [embed_lexicon!(
        "de",
        "german",
        "../../configs/lexicons/german.toml"
    )];

    for (code, alias, content) in embedded {
        match Lexicon::from_toml_str(code, content) {
            Ok(lexicon) => {
                tracing::info!(
                    code,
                    connectors = lexicon.len(),
                    vocabulary = lexicon.basic_vocabulary_len(),
                    "loaded embedded lexicon"
                );
                let lexicon = Arc::new(lexicon);
                map.insert(alias, Arc::clone(&lexicon));
                map.insert(code, lexicon);
            }
            Err(e) => {
                tracing::warn!("Failed to load embedded {code} lexicon: {e}");
            }
        }
    }

    map
}

/// Get an embedded lexicon by code or name
pub fn get_lexicon(code: &str) -> Result<Arc<Lexicon>, LexiconError> {
    let embedded = EMBEDDED.get_or_init(load_embedded_lexicons);

    embedded
        .get(code.to_lowercase().as_str())
        .cloned()
        .ok_or_else(|| LexiconError::UnknownLexicon(code.to_string()))
}

/// Codes of all embedded lexicons, sorted
pub fn list_available_lexicons() -> Vec<&'static str> {
    let embedded = EMBEDDED.get_or_init(load_embedded_lexicons);

    let mut codes: Vec<&'static str> = embedded
        .iter()
        .filter(|(key, lexicon)| **key == lexicon.code())
        .map(|(key, _)| *key)
        .collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CefrLevel, ConnectorCategory};

    #[test]
    fn test_get_lexicon_german() {
        let lexicon = get_lexicon("de").expect("German lexicon should exist");
        assert_eq!(lexicon.code(), "de");
        assert_eq!(lexicon.name(), "German");
        assert!(lexicon.has_basic_vocabulary());
    }

    #[test]
    fn test_get_lexicon_alias_and_case() {
        let by_code = get_lexicon("de").unwrap();
        let by_name = get_lexicon("German").unwrap();
        assert!(Arc::ptr_eq(&by_code, &by_name));
    }

    #[test]
    fn test_get_lexicon_unknown() {
        match get_lexicon("nonexistent") {
            Err(LexiconError::UnknownLexicon(code)) => assert_eq!(code, "nonexistent"),
            other => panic!("Expected UnknownLexicon error, got {other:?}"),
        }
    }

    #[test]
    fn test_list_available_lexicons() {
        assert_eq!(list_available_lexicons(), vec!["de"]);
    }

    #[test]
    fn test_german_levels() {
        let lexicon = get_lexicon("de").unwrap();

        let und = lexicon.lookup("und").unwrap();
        assert_eq!(und.category, ConnectorCategory::Coordinating);
        assert_eq!(und.level, CefrLevel::A1);

        let weil = lexicon.lookup("weil").unwrap();
        assert_eq!(weil.category, ConnectorCategory::Subordinating);
        assert_eq!(weil.level, CefrLevel::A2);

        let waehrend = lexicon.lookup("während").unwrap();
        assert_eq!(waehrend.category, ConnectorCategory::Subordinating);
        assert_eq!(waehrend.level, CefrLevel::B1);

        let dennoch = lexicon.lookup("dennoch").unwrap();
        assert_eq!(dennoch.category, ConnectorCategory::Adverbial);
        assert_eq!(dennoch.level, CefrLevel::B2);
    }

    #[test]
    fn test_repeated_access_shares_instance() {
        let first = get_lexicon("de").unwrap();
        let second = get_lexicon("de").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
