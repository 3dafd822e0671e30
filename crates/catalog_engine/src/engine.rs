use std::io;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_logging::{catalog_error, catalog_info, catalog_trace};

use crate::batch::{BatchFetcher, ProgressSink};
use crate::timer::DelayedTask;
use crate::{EngineEvent, RecordId, RecordSource};

enum EngineCommand {
    LoadRange {
        first: RecordId,
        last: RecordId,
        batch_size: usize,
    },
    DebounceSearch {
        term: String,
        delay: Duration,
    },
}

/// Runs loads and timers on a background tokio runtime.
///
/// Commands go in over a channel; results come back as [`EngineEvent`]s that
/// the caller drains with [`EngineHandle::try_recv`] or
/// [`EngineHandle::recv_timeout`].
pub struct EngineHandle<T> {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent<T>>,
}

impl<T: Send + 'static> EngineHandle<T> {
    pub fn new<S>(source: S) -> io::Result<Self>
    where
        S: RecordSource<Record = T> + 'static,
    {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let fetcher = Arc::new(BatchFetcher::new(source));

        thread::spawn(move || {
            let mut search = DelayedTask::new(runtime.handle().clone());
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::LoadRange {
                        first,
                        last,
                        batch_size,
                    } => {
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(run_load(fetcher, first, last, batch_size, event_tx));
                    }
                    EngineCommand::DebounceSearch { term, delay } => {
                        catalog_trace!("Search debounce rescheduled ({:?})", delay);
                        let event_tx = event_tx.clone();
                        search.schedule(delay, move || {
                            let _ = event_tx.send(EngineEvent::SearchSettled { term });
                        });
                    }
                }
            }
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn load_range(&self, first: RecordId, last: RecordId, batch_size: usize) {
        let _ = self.cmd_tx.send(EngineCommand::LoadRange {
            first,
            last,
            batch_size,
        });
    }

    /// Emits `SearchSettled { term }` after `delay` unless superseded by a later call.
    pub fn debounce_search(&self, term: impl Into<String>, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::DebounceSearch {
            term: term.into(),
            delay,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent<T>> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent<T>> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

struct ChannelProgressSink<T> {
    tx: mpsc::Sender<EngineEvent<T>>,
}

impl<T: Send> ProgressSink for ChannelProgressSink<T> {
    fn report(&self, completed: usize, total: usize) {
        let _ = self.tx.send(EngineEvent::Progress { completed, total });
    }
}

async fn run_load<S>(
    fetcher: Arc<BatchFetcher<S>>,
    first: RecordId,
    last: RecordId,
    batch_size: usize,
    event_tx: mpsc::Sender<EngineEvent<S::Record>>,
) where
    S: RecordSource + 'static,
    S::Record: 'static,
{
    let sink = ChannelProgressSink {
        tx: event_tx.clone(),
    };
    // A panic inside the load comes back as a JoinError.
    let task = tokio::spawn(async move {
        let progress: &dyn ProgressSink = &sink;
        fetcher
            .fetch_range(first, last, batch_size, Some(progress))
            .await
    });

    let event = match task.await {
        Ok(Ok(records)) => {
            let loaded = records.iter().filter(|record| record.is_some()).count();
            catalog_info!(
                "Loaded {} of {} records ({} skipped)",
                loaded,
                records.len(),
                records.len() - loaded
            );
            EngineEvent::LoadCompleted { records }
        }
        Ok(Err(err)) => {
            catalog_error!("Load of ids {}..={} failed: {}", first, last, err);
            EngineEvent::LoadFailed {
                reason: err.to_string(),
            }
        }
        Err(join_err) => {
            catalog_error!("Load task aborted: {}", join_err);
            EngineEvent::LoadFailed {
                reason: join_err.to_string(),
            }
        }
    };
    let _ = event_tx.send(event);
}
