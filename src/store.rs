//! Flat-file persistence
//!
//! The word list and the error log are append-only text files with one entry
//! per line. Search history lives only for the session.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> StoreError {
        let path = path.to_path_buf();
        move |source| StoreError::Io {
            action,
            path,
            source,
        }
    }
}

/// Create `path` (and its parent directories) as an empty file if it does not exist
fn ensure_file(path: &Path) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(StoreError::io("create directory for", path))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(StoreError::io("create", path))?;
    Ok(())
}

fn append_line(path: &Path, line: &str) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(StoreError::io("open", path))?;
    file.write_all(format!("{line}\n").as_bytes())
        .map_err(StoreError::io("write to", path))
}

fn read_lines(path: &Path) -> Result<Vec<String>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StoreError::io("read", path)(err)),
    };
    Ok(content.lines().map(|line| line.trim().to_string()).collect())
}

/// Saved words, one per line in insertion order. Duplicates are allowed.
#[derive(Debug, Clone)]
pub struct WordStore {
    path: PathBuf,
}

impl WordStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        ensure_file(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, word: &str) -> Result<(), StoreError> {
        append_line(&self.path, word)?;
        tracing::info!(word, path = %self.path.display(), "Saved word");
        Ok(())
    }

    /// Every line with surrounding whitespace removed, blank lines included
    pub fn load(&self) -> Result<Vec<String>, StoreError> {
        read_lines(&self.path)
    }
}

/// Free-text error messages, one per line
#[derive(Debug, Clone)]
pub struct ErrorLog {
    path: PathBuf,
}

impl ErrorLog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        ensure_file(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `message`, folding line breaks into spaces so it stays one entry
    pub fn record(&self, message: &str) -> Result<(), StoreError> {
        let line: String = message
            .chars()
            .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
            .collect();
        append_line(&self.path, &line)
    }

    pub fn entries(&self) -> Result<Vec<String>, StoreError> {
        read_lines(&self.path)
    }
}

/// Words searched during this session, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: impl Into<String>) {
        self.entries.push(word.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
