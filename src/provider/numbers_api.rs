//! Remote trivia from the numbers API.

use super::FactSource;
use crate::games::numfact::{Fact, FactError, TriviaEntry};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

/// Fetches random math trivia over HTTP.
///
/// Expects a JSON body of the form `{"text": "...", "number": 7}`.
#[derive(Debug, Clone)]
pub struct NumbersApi {
    url: String,
    client: reqwest::Client,
}

impl NumbersApi {
    /// Creates a source for `url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FactError`] if the HTTP client cannot be built.
    #[instrument(skip(url), fields(url = %url))]
    pub fn new(url: String, timeout: Duration) -> Result<Self, FactError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    /// The endpoint queried.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl FactSource for NumbersApi {
    fn name(&self) -> &str {
        "numbers-api"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Fact, FactError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FactError::new(format!("Unexpected status {}", status)));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Received trivia payload");
        let entry: TriviaEntry = serde_json::from_str(&body)?;
        entry.into_fact()
    }
}
