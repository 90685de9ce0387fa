//! Lookup orchestration
//!
//! [`Wordbook`] owns everything a session needs: the HTTP client, the word
//! list, the error log and the search history. The interactive screen and the
//! command line both drive it and turn its outcomes into [`Notification`]s.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::extract::{extract, ExtractionResult};
use crate::fetch::{DictionaryClient, FetchError};
use crate::page::{Document, DomError};
use crate::store::{ErrorLog, History, StoreError, WordStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Search,
    Add,
}

impl Action {
    pub fn verb(self) -> &'static str {
        match self {
            Action::Search => "search",
            Action::Add => "add",
        }
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Please enter a word to {}.", .0.verb())]
    EmptyInput(Action),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not read page: {0}")]
    Parse(#[from] DomError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LookupError {
    /// Input validation failures are shown to the user but never logged
    pub fn is_logged(&self) -> bool {
        !matches!(self, LookupError::EmptyInput(_))
    }

    pub fn notification(&self) -> Notification {
        match self {
            LookupError::EmptyInput(_) => Notification::error(self.to_string()),
            _ => Notification::error(format!("An error occurred: {self}")),
        }
    }
}

/// A title and message pair shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == "Error"
    }
}

/// A completed search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lookup {
    pub word: String,
    #[serde(flatten)]
    pub result: ExtractionResult,
}

pub struct Wordbook {
    client: DictionaryClient,
    words: WordStore,
    errors: ErrorLog,
    history: History,
}

impl Wordbook {
    /// Build a session from config, creating the word list and error log if absent
    pub fn open(config: &Config) -> Result<Self, LookupError> {
        let client = DictionaryClient::from_config(config)?;
        let words = WordStore::open(config.word_list_path())?;
        let errors = ErrorLog::open(config.error_log_path())?;
        debug!(
            words = %words.path().display(),
            errors = %errors.path().display(),
            "Opened wordbook"
        );
        Ok(Self::new(client, words, errors))
    }

    pub fn new(client: DictionaryClient, words: WordStore, errors: ErrorLog) -> Self {
        Self {
            client,
            words,
            errors,
            history: History::new(),
        }
    }

    /// Fetch and extract `input`. Successful searches are added to the history.
    pub async fn search(&mut self, input: &str) -> Result<Lookup, LookupError> {
        let word = validate(input, Action::Search)?;
        let result = self.fetch_and_extract(word).await;
        let result = self.logged(result)?;

        if result.is_empty() {
            warn!(word, "Page had no recognisable definition content");
        }
        self.history.push(word);
        info!(word, "Looked up word");

        Ok(Lookup {
            word: word.to_string(),
            result,
        })
    }

    async fn fetch_and_extract(&self, word: &str) -> Result<ExtractionResult, LookupError> {
        let html = self.client.fetch(word).await?;
        let document = Document::parse(&html)?;
        Ok(extract(&document))
    }

    /// Append `input` to the word list and return the confirmation to show
    pub fn add_word(&mut self, input: &str) -> Result<Notification, LookupError> {
        let word = validate(input, Action::Add)?;
        let result = self.words.append(word).map_err(LookupError::from);
        self.logged(result)?;
        Ok(Notification::success(format!(
            "Word '{word}' added to the dictionary."
        )))
    }

    pub fn saved_words(&self) -> Result<Vec<String>, LookupError> {
        let result = self.words.load().map_err(LookupError::from);
        self.logged(result)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn error_log(&self) -> &ErrorLog {
        &self.errors
    }

    /// Record a failure in the error log. A failure to write the log itself
    /// is only traced so the original error still reaches the user.
    fn logged<T>(&self, result: Result<T, LookupError>) -> Result<T, LookupError> {
        if let Err(err) = &result {
            if err.is_logged() {
                warn!(error = %err, "Lookup failed");
                if let Err(log_err) = self.errors.record(&err.to_string()) {
                    warn!(error = %log_err, "Could not write error log");
                }
            }
        }
        result
    }
}

fn validate(input: &str, action: Action) -> Result<&str, LookupError> {
    let word = input.trim();
    if word.is_empty() {
        return Err(LookupError::EmptyInput(action));
    }
    Ok(word)
}
