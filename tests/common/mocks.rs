use async_trait::async_trait;
use logan::{
    Error, Result,
    client::{AnalyzerBackend, BulkJobLogs, JobLog},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Mock analysis backend for testing. Records every payload it receives and
/// serves queued responses, so tests can assert on request counts and exact
/// request bodies without a network.
#[derive(Debug)]
pub struct RecordingBackend {
    pub responses: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<JobLog>>>,
    pub error: Option<String>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<Value>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<JobLog> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalyzerBackend for RecordingBackend {
    async fn analyze(&self, job: &JobLog) -> Result<Value> {
        self.requests.lock().unwrap().push(job.clone());

        if let Some(ref error) = self.error {
            return Err(Error::backend(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::backend("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }

    async fn summarize(&self, jobs: &BulkJobLogs) -> Result<Value> {
        for job in &jobs.jobs {
            self.requests.lock().unwrap().push(job.clone());
        }

        if let Some(ref error) = self.error {
            return Err(Error::backend(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::backend("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }

    async fn health(&self) -> Result<Value> {
        if let Some(ref error) = self.error {
            return Err(Error::backend(error.clone()));
        }

        Ok(serde_json::json!({"status": "ok"}))
    }
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}
