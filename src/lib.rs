//! wordbook: Terminal dictionary lookup with a personal word list
//!
//! This library fetches a word's page from an online dictionary, extracts
//! meaning, usage examples, synonyms and antonyms from the HTML, and keeps a
//! flat-file word list alongside an error log.

pub mod ansi;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod lookup;
pub mod page;
pub mod store;
pub mod theme;

/// Output format for the `lookup` command
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

// Re-export commonly used types
pub use config::Config;
pub use extract::{extract, ExtractionResult};
pub use lookup::{Lookup, LookupError, Notification, Wordbook};
pub use page::Document;
