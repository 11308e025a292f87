mod types;

pub use types::*;

use crate::{Result, config::BackendConfig};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Client seam for the analysis backend. The backend's response shapes are
/// deliberately not modeled here; callers render whatever JSON comes back.
#[async_trait]
pub trait AnalyzerBackend: Send + Sync {
    async fn analyze(&self, job: &JobLog) -> Result<Value>;

    async fn summarize(&self, jobs: &BulkJobLogs) -> Result<Value>;

    async fn health(&self) -> Result<Value>;
}

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn post_json<B: Serialize + Sync>(&self, path: &str, body: &B) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let value = response.json::<Value>().await?;
        Ok(value)
    }
}

#[async_trait]
impl AnalyzerBackend for HttpBackend {
    async fn analyze(&self, job: &JobLog) -> Result<Value> {
        self.post_json("/analyze", job).await
    }

    async fn summarize(&self, jobs: &BulkJobLogs) -> Result<Value> {
        self.post_json("/summarize", jobs).await
    }

    async fn health(&self) -> Result<Value> {
        let url = format!("{}/health", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let value = response.json::<Value>().await?;
        Ok(value)
    }
}
