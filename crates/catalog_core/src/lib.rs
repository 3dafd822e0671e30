//! Catalog core: pure data pipeline, view state and view-model helpers.
mod config;
mod controller;
mod dropdown;
mod effect;
mod filter;
mod msg;
mod normalize;
mod record;
mod state;
mod update;
mod view_model;
mod window;

pub use config::{
    CatalogConfig, BATCH_SIZE, ID_RANGE, ITEMS_PER_PAGE, SEARCH_DEBOUNCE_MS, STAT_BAR_MAX,
};
pub use controller::{AppController, RenderSink};
pub use dropdown::{CategoryDropdown, CategoryOption, DropdownInput, DropdownKey, DropdownState};
pub use effect::Effect;
pub use filter::{normalize_search_term, FilterEngine, FilterState};
pub use msg::Msg;
pub use normalize::{
    format_record_number, format_statistic_label, format_tenths, format_trait_name, normalize,
    normalize_record, stat_bar_percent,
};
pub use record::{
    DisplayRecord, Experience, Measurements, NamedRef, RawAbilitySlot, RawArtwork,
    RawOtherSprites, RawRecord, RawSprites, RawStat, RawTypeSlot, RecordId, Statistic,
};
pub use state::{AppState, LoadPhase, LoadProgress, LOAD_FAILURE_MESSAGE};
pub use update::update;
pub use view_model::{
    card_view, detail_view, AppViewModel, CardView, DetailView, DropdownView, ErrorView,
    StatBarView, CARD_PREVIEW_STATS,
};
pub use window::{PageInfo, RenderWindow, WindowInfo, WindowMode};
