use crate::dropdown::{CategoryDropdown, DropdownInput};
use crate::filter::FilterEngine;
use crate::normalize::normalize;
use crate::view_model::{self, AppViewModel};
use crate::window::RenderWindow;
use crate::{CatalogConfig, DisplayRecord, RawRecord, RecordId};

/// Message shown in place of the grid when the load sequence fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load catalog data. Please refresh the page.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    config: CatalogConfig,
    phase: LoadPhase,
    progress: Option<LoadProgress>,
    skipped: usize,
    failure_reason: Option<String>,
    filter: FilterEngine,
    window: RenderWindow,
    dropdown: CategoryDropdown,
    search_input: String,
    selected: Option<RecordId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            window: RenderWindow::new(config.items_per_page),
            config,
            phase: LoadPhase::Idle,
            progress: None,
            skipped: 0,
            failure_reason: None,
            filter: FilterEngine::new(),
            dropdown: CategoryDropdown::default(),
            search_input: String::new(),
            selected: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        view_model::build(self)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn window(&self) -> &RenderWindow {
        &self.window
    }

    pub fn dropdown(&self) -> &CategoryDropdown {
        &self.dropdown
    }

    pub(crate) fn progress(&self) -> Option<LoadProgress> {
        self.progress
    }

    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }

    pub(crate) fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub(crate) fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn selected_record(&self) -> Option<&DisplayRecord> {
        self.selected.and_then(|id| self.filter.find(id))
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn start_load(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        let total = (self.config.last_id as usize + 1).saturating_sub(self.config.first_id as usize);
        self.phase = LoadPhase::Loading;
        self.progress = Some(LoadProgress {
            completed: 0,
            total,
        });
        self.dirty = true;
        true
    }

    pub(crate) fn apply_progress(&mut self, completed: usize, total: usize) {
        if self.phase != LoadPhase::Loading {
            return;
        }
        self.progress = Some(LoadProgress { completed, total });
        self.dirty = true;
    }

    /// Normalizes the batch result into the working set and enters `Ready`.
    ///
    /// Failed ids are dropped, not kept as placeholders. An entirely empty
    /// result counts as a failed load.
    pub(crate) fn finish_load(&mut self, raw: Vec<Option<RawRecord>>) {
        if self.phase != LoadPhase::Loading {
            return;
        }
        let requested = raw.len();
        let mut records: Vec<DisplayRecord> = raw.into_iter().filter_map(normalize).collect();
        records.sort_by_key(|record| record.id);
        self.skipped = requested - records.len();

        if records.is_empty() {
            self.fail_load(format!("none of the {requested} requested records could be loaded"));
            return;
        }

        self.filter.set_working_set(records);
        self.dropdown = CategoryDropdown::new(self.filter.categories());
        self.progress = None;
        self.phase = LoadPhase::Ready;
        self.refresh_window();
    }

    pub(crate) fn fail_load(&mut self, reason: String) {
        if self.phase != LoadPhase::Loading {
            return;
        }
        self.phase = LoadPhase::Error;
        self.progress = None;
        self.failure_reason = Some(reason);
        self.dirty = true;
    }

    pub(crate) fn set_search_input(&mut self, text: String) {
        self.search_input = text;
    }

    pub(crate) fn apply_search(&mut self, term: &str) {
        self.filter.set_search_term(term);
        self.refresh_window();
    }

    /// Categories missing from the option list are ignored.
    pub(crate) fn apply_category(&mut self, category: &str) {
        if !self.dropdown.select_value(category) {
            return;
        }
        self.filter.set_category(category);
        self.refresh_window();
    }

    pub(crate) fn apply_dropdown(&mut self, input: DropdownInput) {
        let before = self.dropdown.state();
        match self.dropdown.handle(input) {
            Some(category) => self.apply_category(&category),
            None => self.dirty |= before != self.dropdown.state(),
        }
    }

    pub(crate) fn reveal_more(&mut self) {
        let before = (self.window.mode(), self.window.revealed_count());
        self.window.reveal_next();
        self.dirty |= before != (self.window.mode(), self.window.revealed_count());
    }

    pub(crate) fn change_page(&mut self, change: impl FnOnce(&mut RenderWindow) -> bool) {
        self.dirty |= change(&mut self.window);
    }

    pub(crate) fn select(&mut self, id: RecordId) {
        if self.filter.find(id).is_some() && self.selected != Some(id) {
            self.selected = Some(id);
            self.dirty = true;
        }
    }

    pub(crate) fn close_detail(&mut self) {
        if self.selected.take().is_some() {
            self.dirty = true;
        }
    }

    /// Re-seeds the window from the filtered set and reveals the first page.
    fn refresh_window(&mut self) {
        self.window.set_source(self.filter.filtered().to_vec());
        self.window.reveal_next();
        self.dirty = true;
    }
}
