use crate::{DropdownInput, RawRecord, RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application start: kick off the one-time load.
    StartLoad,
    /// Engine finished another chunk of the load.
    LoadProgress { completed: usize, total: usize },
    /// Engine finished the whole range; `None` marks ids whose fetch failed.
    RecordsLoaded(Vec<Option<RawRecord>>),
    /// The load sequence itself failed.
    LoadFailed(String),
    /// User typed into the search box (raw, not yet debounced).
    SearchInput(String),
    /// Debounce window elapsed for the last search input.
    SearchSettled(String),
    /// User picked a category; empty means all.
    CategorySelected(String),
    /// User clicked "load more".
    LoadMoreRequested,
    PageNext,
    PagePrev,
    PageRequested(usize),
    /// User clicked a card.
    ItemSelected(RecordId),
    /// User dismissed the detail overlay.
    DetailClosed,
    /// Pointer or keyboard input aimed at the category menu.
    Dropdown(DropdownInput),
    /// Fallback for placeholder wiring.
    NoOp,
}
