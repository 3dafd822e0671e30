use futures_util::future::join_all;

use catalog_logging::{catalog_debug, catalog_warn};

use crate::{BatchError, RecordId, RecordSource};

/// Receives `(completed, total)` once per settled chunk.
pub trait ProgressSink: Send + Sync {
    fn report(&self, completed: usize, total: usize);
}

impl<F> ProgressSink for F
where
    F: Fn(usize, usize) + Send + Sync,
{
    fn report(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}

/// Loads an id range in sequential chunks of concurrent fetches.
///
/// Chunk N+1 is not issued until every fetch of chunk N has settled and its
/// progress has been reported. A failed fetch becomes `None` at its position
/// and never aborts the rest of the range.
#[derive(Debug)]
pub struct BatchFetcher<S> {
    source: S,
}

impl<S: RecordSource> BatchFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns exactly `end - start + 1` entries in id order.
    pub async fn fetch_range(
        &self,
        start: RecordId,
        end: RecordId,
        batch_size: usize,
        progress: Option<&dyn ProgressSink>,
    ) -> Result<Vec<Option<S::Record>>, BatchError> {
        if start == 0 || start > end {
            return Err(BatchError::InvalidRange { start, end });
        }
        if batch_size == 0 {
            return Err(BatchError::ZeroBatchSize);
        }

        let total = (end - start) as usize + 1;
        let span = u32::try_from(batch_size - 1).unwrap_or(u32::MAX);
        let mut results = Vec::with_capacity(total.min(batch_size));
        let mut chunk_start = start;

        loop {
            let chunk_end = chunk_start.saturating_add(span).min(end);
            let chunk = join_all((chunk_start..=chunk_end).map(|id| self.fetch_one(id))).await;
            results.extend(chunk);

            catalog_debug!(
                "Fetched ids {}..={} ({}/{})",
                chunk_start,
                chunk_end,
                results.len(),
                total
            );
            if let Some(sink) = progress {
                sink.report(results.len(), total);
            }

            if chunk_end == end {
                break;
            }
            chunk_start = chunk_end + 1;
        }

        Ok(results)
    }

    async fn fetch_one(&self, id: RecordId) -> Option<S::Record> {
        match self.source.get_record(id).await {
            Ok(record) => Some(record),
            Err(err) => {
                catalog_warn!("Skipping record {}: {}", id, err);
                None
            }
        }
    }
}
