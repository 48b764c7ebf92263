//! Bundled trivia read from a local JSON file.

use super::FactSource;
use crate::games::numfact::{Fact, FactError, TriviaEntry};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use std::path::PathBuf;
use tracing::{debug, instrument, warn};

/// Picks a random entry from a JSON array of `{text, number}` objects.
#[derive(Debug, Clone)]
pub struct LocalCache {
    path: PathBuf,
}

impl LocalCache {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads and normalizes every entry in the file.
    ///
    /// # Errors
    ///
    /// Returns [`FactError`] if the file cannot be read or parsed, or if any
    /// entry normalizes to blank text.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load_all(&self) -> Result<Vec<Fact>, FactError> {
        let entries = self.read_entries().await?;
        entries.into_iter().map(TriviaEntry::into_fact).collect()
    }

    /// Loads every entry that normalizes to a valid fact.
    ///
    /// Invalid entries are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`FactError`] if the file cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load_valid(&self) -> Result<Vec<Fact>, FactError> {
        let entries = self.read_entries().await?;
        let total = entries.len();
        let facts: Vec<Fact> = entries
            .into_iter()
            .filter_map(|entry| {
                let number = entry.number;
                match entry.into_fact() {
                    Ok(fact) => Some(fact),
                    Err(e) => {
                        warn!(number, error = %e, "Skipping invalid trivia entry");
                        None
                    }
                }
            })
            .collect();
        debug!(total, valid = facts.len(), "Filtered local trivia");
        Ok(facts)
    }

    async fn read_entries(&self) -> Result<Vec<TriviaEntry>, FactError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let entries: Vec<TriviaEntry> = serde_json::from_str(&content)?;
        debug!(entries = entries.len(), "Loaded local trivia");
        Ok(entries)
    }
}

#[async_trait]
impl FactSource for LocalCache {
    fn name(&self) -> &str {
        "local-cache"
    }

    async fn fetch(&self) -> Result<Fact, FactError> {
        let facts = self.load_valid().await?;
        facts
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| FactError::new(format!("{} has no valid entries", self.path.display())))
    }
}
