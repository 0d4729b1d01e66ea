//! Logging setup and the interaction journal.
//!
//! Console output goes through `tracing_subscriber::fmt`. When a journal
//! directory is configured, every event is also appended to a per-session
//! JSONL file:
//!
//! ```text
//! logs/
//! ├── 2026-10-14_01J9Z3K7Q8.jsonl
//! └── 2026-10-15_01J9ZB2M4T.jsonl
//! ```
//!
//! Journals are plain JSONL and can be queried with jq:
//!
//! ```bash
//! # Every failed submission
//! jq 'select(.target == "fleetsite_core::submit" and .level == "warn")' logs/*.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

use std::path::PathBuf;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{SiteError, SiteResult};

pub use entry::JournalEntry;
pub use layer::JournalLayer;
pub use writer::{read_journal, JournalWriter};

/// Filter used when neither the config nor `RUST_LOG` sets one.
pub const DEFAULT_FILTER: &str = "fleetsite=info,fleetsite_core=info,fleetsite_ui=info";

/// Build the filter: explicit config first, then `RUST_LOG`, then the default.
pub fn env_filter(config: &LoggingConfig) -> SiteResult<EnvFilter> {
    match &config.filter {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| SiteError::Logging(format!("invalid filter {directive:?}: {e}"))),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Returns the journal path when one is
/// configured.
pub fn init_logging(config: &LoggingConfig, session: &str) -> SiteResult<Option<PathBuf>> {
    let journal = config
        .journal_dir
        .as_ref()
        .map(|dir| JournalLayer::new(dir, session))
        .transpose()?;
    let journal_path = journal.as_ref().map(|l| l.journal_path().to_path_buf());

    tracing_subscriber::registry()
        .with(env_filter(config)?)
        .with(tracing_subscriber::fmt::layer())
        .with(journal)
        .try_init()
        .map_err(|e| SiteError::Logging(e.to_string()))?;

    Ok(journal_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_is_parsed() {
        let config = LoggingConfig {
            filter: Some("fleetsite_core=debug".to_string()),
            journal_dir: None,
        };
        assert!(env_filter(&config).is_ok());
    }

    #[test]
    fn malformed_filter_is_rejected() {
        let config = LoggingConfig {
            filter: Some("fleetsite_core=loud".to_string()),
            journal_dir: None,
        };
        assert!(matches!(env_filter(&config), Err(SiteError::Logging(_))));
    }
}
