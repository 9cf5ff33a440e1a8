// Store module: owns the on-disk quote collection. The whole file is read
// on every load and rewritten on every save; there is no locking, so the
// last writer wins.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default data file, resolved against the current directory.
pub const DEFAULT_DATA_FILE: &str = "quotes.json";

/// A single quiz entry as it is stored in the JSON file.
///
/// Only `id` is required when reading. Text fields missing from a
/// hand-edited file load as `None` and stay absent when written back.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latin_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_translation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Fields collected by the `add` flow, before an id is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuote {
    pub latin_text: String,
    pub english_translation: String,
    pub author: String,
    pub work: String,
    pub notes: String,
}

impl NewQuote {
    fn with_id(self, id: u64) -> Quote {
        Quote {
            id,
            latin_text: Some(self.latin_text),
            english_translation: Some(self.english_translation),
            author: Some(self.author),
            work: Some(self.work),
            notes: Some(self.notes),
        }
    }
}

/// JSON-file backed quote collection. The path is plain configuration;
/// nothing is touched on disk until `load` or `save` is called.
#[derive(Debug, Clone)]
pub struct QuoteStore {
    path: PathBuf,
}

impl QuoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        QuoteStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every quote from the data file.
    ///
    /// A missing file is created holding an empty array. Content that is
    /// empty or does not parse as an array of quotes yields an empty
    /// collection; only real I/O failures are returned as errors.
    pub fn load(&self) -> Result<Vec<Quote>> {
        match self.read()? {
            Contents::Quotes(quotes) => Ok(quotes),
            Contents::Unreadable { .. } => Ok(Vec::new()),
        }
    }

    fn read(&self) -> Result<Contents> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "data file missing, creating it");
            self.save(&[])?;
            return Ok(Contents::Quotes(Vec::new()));
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        match serde_json::from_str::<Vec<Quote>>(&raw) {
            Ok(quotes) => {
                debug!(path = %self.path.display(), count = quotes.len(), "loaded quotes");
                Ok(Contents::Quotes(quotes))
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    bytes = raw.len(),
                    error = %e,
                    "unreadable quote data, using an empty collection"
                );
                Ok(Contents::Unreadable { blank: raw.trim().is_empty() })
            }
        }
    }

    /// Overwrite the data file with `quotes`, pretty-printed with 2-space
    /// indentation. serde_json writes non-ASCII characters as-is, so macrons
    /// survive literally.
    pub fn save(&self, quotes: &[Quote]) -> Result<()> {
        let body = serde_json::to_string_pretty(quotes).context("Serializing quotes")?;
        fs::write(&self.path, body)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = quotes.len(), "saved quotes");
        Ok(())
    }

    /// Append a new quote with the next free id and persist immediately.
    ///
    /// Refuses to write over a non-empty file that does not parse, so a
    /// single bad record never wipes the collection.
    pub fn add(&self, new_quote: NewQuote) -> Result<Quote> {
        let mut quotes = match self.read()? {
            Contents::Quotes(quotes) => quotes,
            Contents::Unreadable { blank: true } => Vec::new(),
            Contents::Unreadable { blank: false } => bail!(
                "{} holds quote data that could not be parsed; fix or remove it before adding",
                self.path.display()
            ),
        };
        let quote = new_quote.with_id(next_id(&quotes)?);
        quotes.push(quote.clone());
        self.save(&quotes)?;
        info!(id = quote.id, "added quote");
        Ok(quote)
    }
}

/// What `read` found on disk.
enum Contents {
    Quotes(Vec<Quote>),
    Unreadable { blank: bool },
}

/// Next unused id: one past the highest existing id, or 1 for an empty
/// collection.
pub fn next_id(quotes: &[Quote]) -> Result<u64> {
    match quotes.iter().map(|q| q.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .with_context(|| format!("no id left after {}", max)),
    }
}
