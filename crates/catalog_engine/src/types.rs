use std::fmt;

use thiserror::Error;

pub type RecordId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent<T> {
    /// Another chunk settled; `completed` never decreases within one load.
    Progress { completed: usize, total: usize },
    /// One entry per requested id, in id order. `None` marks a failed fetch.
    LoadCompleted { records: Vec<Option<T>> },
    /// The load sequence itself failed; no records are delivered.
    LoadFailed { reason: String },
    /// The search quiet window elapsed for `term`.
    SearchSettled { term: String },
}

/// Failure of a single record fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("record {id}: {kind} ({message})")]
pub struct FetchError {
    pub id: RecordId,
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(id: RecordId, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Decode,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Decode => write!(f, "malformed record"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Range-level failures of a batched load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("invalid id range {start}..={end}")]
    InvalidRange { start: RecordId, end: RecordId },
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

/// Failure to set up a data-source client.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}
