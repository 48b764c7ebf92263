//! Fact sources and the fallback chain that never fails.
//!
//! A [`FactProvider`] tries each [`FactSource`] in order and falls back to
//! [`Fact::fallback`] when all of them fail.

mod local_cache;
mod numbers_api;

pub use local_cache::LocalCache;
pub use numbers_api::NumbersApi;

use crate::config::GameConfig;
use crate::games::numfact::{Fact, FactError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// One fallible origin of facts.
#[async_trait]
pub trait FactSource: std::fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Fetches one normalized fact.
    async fn fetch(&self) -> Result<Fact, FactError>;
}

/// Ordered chain of fact sources.
#[derive(Debug, Default)]
pub struct FactProvider {
    sources: Vec<Box<dyn FactSource>>,
}

impl FactProvider {
    /// Creates a provider with no sources; it always yields the fallback fact.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a source to the end of the chain.
    pub fn with_source(mut self, source: impl FactSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Builds the game's fact chain from configuration: the numbers API at
    /// `api_url` (unless `offline`), then the local cache file.
    ///
    /// # Errors
    ///
    /// Returns [`FactError`] if the HTTP client cannot be built.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig, offline: bool) -> Result<Self, FactError> {
        Self::chain(config, config.api_url(), offline)
    }

    /// Builds the random trivia chain: `trivia_url` (unless `offline`), then
    /// the same local cache file.
    ///
    /// # Errors
    ///
    /// Returns [`FactError`] if the HTTP client cannot be built.
    #[instrument(skip(config))]
    pub fn trivia_from_config(config: &GameConfig, offline: bool) -> Result<Self, FactError> {
        Self::chain(config, config.trivia_url(), offline)
    }

    fn chain(config: &GameConfig, url: &str, offline: bool) -> Result<Self, FactError> {
        let mut provider = Self::new();
        if !offline {
            provider = provider.with_source(NumbersApi::new(
                url.to_string(),
                Duration::from_secs(*config.request_timeout_secs()),
            )?);
        }
        Ok(provider.with_source(LocalCache::new(config.cache_path().clone())))
    }

    /// Number of sources in the chain.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if the chain has no sources.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Returns a fact from the first source that succeeds, or the fallback fact.
    #[instrument(skip(self), fields(sources = self.sources.len()))]
    pub async fn get_fact(&self) -> Fact {
        for source in &self.sources {
            match source.fetch().await {
                Ok(fact) => {
                    info!(source = source.name(), number = fact.number(), "Fetched fact");
                    return fact;
                }
                Err(e) => {
                    warn!(source = source.name(), error = %e, "Fact source failed, trying next");
                }
            }
        }
        warn!("All fact sources failed, using fallback fact");
        Fact::fallback()
    }
}
