//! Fetch, extract, serialize
//!
//! A [`Pipeline`] owns the HTTP client shared by every request. Each run
//! fetches the template's source page, interprets it and returns the clean
//! records; nothing is cached between runs.

use std::time::{Duration, Instant};

use url::Url;

use crate::config::FetchSettings;
use crate::error::{ConfigError, FetchError, PipelineError};
use crate::extractors::interpret;
use crate::templates::ExtractionTemplate;

#[derive(Debug, Clone)]
pub struct Pipeline {
    client: reqwest::Client,
    timeout: Duration,
}

impl Pipeline {
    pub fn new(settings: &FetchSettings) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            timeout: settings.timeout,
        })
    }

    /// GET `url` and return the body as text.
    pub async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| self.classify(url, e))
    }

    /// Fetch the template's source page and extract its records.
    pub async fn run<T: ExtractionTemplate>(
        &self,
        template: &T,
    ) -> Result<Vec<T::Record>, PipelineError> {
        let started = Instant::now();
        let url = template.source_url();

        let html = self.fetch(url).await?;
        tracing::debug!(
            template = template.name(),
            bytes = html.len(),
            "Fetched source page"
        );

        // Parsing a full list page is CPU-bound; keep it off the async workers.
        let worker = template.clone();
        let records = tokio::task::spawn_blocking(move || interpret(&html, &worker)).await??;
        tracing::info!(
            template = template.name(),
            url = %url,
            records = records.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Extraction complete"
        );

        Ok(records)
    }

    /// Run the template and serialize the records as compact JSON.
    pub async fn handle<T: ExtractionTemplate>(
        &self,
        template: &T,
    ) -> Result<String, PipelineError> {
        let records = self.run(template).await?;
        Ok(serde_json::to_string(&records)?)
    }

    fn classify(&self, url: &Url, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Transport {
                url: url.to_string(),
                source: error,
            }
        }
    }
}
