use std::ops::RangeInclusive;
use std::time::Duration;

use crate::RecordId;

/// Ids requested from the data source on startup.
pub const ID_RANGE: RangeInclusive<RecordId> = 1..=386;
pub const BATCH_SIZE: usize = 50;
pub const ITEMS_PER_PAGE: usize = 24;
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
/// Statistic value that fills a detail bar to 100%.
pub const STAT_BAR_MAX: u32 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub first_id: RecordId,
    pub last_id: RecordId,
    pub batch_size: usize,
    pub items_per_page: usize,
    pub search_debounce: Duration,
    pub stat_bar_max: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            first_id: *ID_RANGE.start(),
            last_id: *ID_RANGE.end(),
            batch_size: BATCH_SIZE,
            items_per_page: ITEMS_PER_PAGE,
            search_debounce: Duration::from_millis(SEARCH_DEBOUNCE_MS),
            stat_bar_max: STAT_BAR_MAX,
        }
    }
}
