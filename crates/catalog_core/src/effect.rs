use std::time::Duration;

use crate::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch `first..=last` in chunks of `batch_size`.
    LoadRange {
        first: RecordId,
        last: RecordId,
        batch_size: usize,
    },
    /// Deliver `Msg::SearchSettled(term)` after `delay`, replacing any pending one.
    DebounceSearch { term: String, delay: Duration },
}
