use crate::{Error, Result};
use tracing::{debug, warn};

// Submitter states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
}

// Submitter events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitEvent {
    Begin,
    Finished,
}

impl SubmitState {
    /// A submission may only begin while idle; overlapping submissions are
    /// refused instead of racing on the result panel.
    pub fn transition(self, event: SubmitEvent) -> Result<SubmitState> {
        let next = match (self, event) {
            (SubmitState::Idle, SubmitEvent::Begin) => SubmitState::Submitting,
            (SubmitState::Submitting, SubmitEvent::Finished) => SubmitState::Idle,
            _ => {
                warn!(
                    "Invalid submitter transition from {:?} with event {:?}",
                    self, event
                );
                return Err(Error::InvalidTransition {
                    current: format!("{:?}", self),
                    requested: format!("{:?}", event),
                });
            }
        };

        debug!("Submitter state transition: {:?} -> {:?}", self, next);
        Ok(next)
    }
}
