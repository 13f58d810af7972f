//! Discourse connector classification and usage statistics

mod classifier;
mod usage;

pub use classifier::{ConnectorClassifier, ConnectorMatch, ConnectorMatches};
pub use usage::ConnectorUsage;
