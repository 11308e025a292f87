use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid exit code: {input:?}")]
    InvalidExitCode { input: String },

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// The blocking notice shown to the user for a failed submission.
    ///
    /// Transport failures, HTTP error statuses and response-decode failures
    /// all collapse into one message; the distinguishing detail only goes to
    /// the logs.
    pub fn user_notice(&self) -> &'static str {
        match self {
            Self::InvalidExitCode { .. } => "Please enter a valid exit code",
            Self::InvalidTransition { .. } => "A submission is already in progress",
            _ => "Failed to connect to backend",
        }
    }
}
