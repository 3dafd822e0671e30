//! Catalog engine: data-source IO, batched loading and timers on a tokio runtime.
mod batch;
mod engine;
mod fetch;
mod timer;
mod types;

pub use batch::{BatchFetcher, ProgressSink};
pub use engine::EngineHandle;
pub use fetch::{FetchSettings, HttpRecordSource, RecordSource};
pub use timer::DelayedTask;
pub use types::{BatchError, EngineEvent, FailureKind, FetchError, RecordId, SourceError};
