mod panel;
mod state;

pub use panel::ResultPanel;
pub use state::{SubmitEvent, SubmitState};

use crate::{
    Error, Result,
    client::{AnalyzerBackend, JobLog},
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Raw field values as captured from the user, before any validation.
///
/// The exit code is kept as a string here: deciding whether it is a valid
/// integer belongs to [`FormSubmitter::submit`], not to whoever collected
/// the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFields {
    pub stderr: String,
    pub stdout: String,
    pub exit_code: String,
}

impl LogFields {
    /// Builds the request payload. The exit-code field must parse as an
    /// integer (surrounding whitespace tolerated); the log streams pass
    /// through untouched, empty or not.
    pub fn validate(&self) -> Result<JobLog> {
        let exit_code =
            self.exit_code
                .trim()
                .parse::<i32>()
                .map_err(|_| Error::InvalidExitCode {
                    input: self.exit_code.clone(),
                })?;

        Ok(JobLog {
            stderr: self.stderr.clone(),
            stdout: self.stdout.clone(),
            exit_code,
        })
    }
}

/// Runs single submission cycles against the analysis backend: validate the
/// fields, post them, render the response into the result panel.
pub struct FormSubmitter {
    backend: Arc<dyn AnalyzerBackend>,
    state: SubmitState,
    panel: ResultPanel,
}

impl FormSubmitter {
    pub fn new(backend: Arc<dyn AnalyzerBackend>) -> Self {
        Self {
            backend,
            state: SubmitState::Idle,
            panel: ResultPanel::new(),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    /// One submission: either the full round trip completes and the panel
    /// shows the pretty-printed response, or nothing is rendered and the
    /// returned error carries the user notice.
    pub async fn submit(&mut self, fields: &LogFields) -> Result<()> {
        self.state = self.state.transition(SubmitEvent::Begin)?;

        let result = self.run(fields).await;

        // Back to idle whether the round trip succeeded or not.
        self.state = self.state.transition(SubmitEvent::Finished)?;
        result
    }

    async fn run(&mut self, fields: &LogFields) -> Result<()> {
        let job = fields.validate()?;
        debug!("Submitting job log with exit code {}", job.exit_code);

        let response = self.backend.analyze(&job).await.inspect_err(|e| {
            error!("Analysis request failed: {}", e);
        })?;

        let pretty = serde_json::to_string_pretty(&response)?;
        self.panel.show(pretty);

        info!("Analysis response rendered");
        Ok(())
    }
}
