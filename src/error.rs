//! Error types shared across the dashboard layers

use thiserror::Error;

/// Failure of a single backend request.
///
/// Every variant is handled the same way by the fetch coordinator: the
/// failure is logged and the previously rendered value stays in place.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error on {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    #[error("malformed body from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),
}

impl FetchError {
    /// Short label used for logging and metric labels
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
            FetchError::Url(_) => "url",
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("{0} must be greater than zero")]
    Zero(&'static str),
}

#[derive(Error, Debug, PartialEq)]
pub enum SchedulerError {
    #[error("poll period must be greater than zero")]
    ZeroPeriod,

    #[error("scheduler is already running")]
    AlreadyRunning,
}
