use crate::{update, AppState, AppViewModel, CatalogConfig, DropdownInput, Effect, Msg, RecordId};

/// Receives a fresh view model whenever the catalog state changes.
pub trait RenderSink {
    fn render(&mut self, view: &AppViewModel);
}

impl<F: FnMut(&AppViewModel)> RenderSink for F {
    fn render(&mut self, view: &AppViewModel) {
        self(view)
    }
}

/// Owns the catalog state and relays presentation events into [`update`].
///
/// Effects are handed back to the caller, which runs them and feeds the
/// resulting messages into [`AppController::dispatch`].
pub struct AppController<S> {
    state: AppState,
    sink: S,
}

impl<S: RenderSink> AppController<S> {
    pub fn new(config: CatalogConfig, sink: S) -> Self {
        Self {
            state: AppState::with_config(config),
            sink,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.sink.render(&state.view());
        }
        self.state = state;
        effects
    }

    pub fn start(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::StartLoad)
    }

    pub fn on_search_input(&mut self, text: &str) -> Vec<Effect> {
        self.dispatch(Msg::SearchInput(text.to_string()))
    }

    pub fn on_category_select(&mut self, category: &str) -> Vec<Effect> {
        self.dispatch(Msg::CategorySelected(category.to_string()))
    }

    pub fn on_load_more_requested(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::LoadMoreRequested)
    }

    pub fn on_page_next(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::PageNext)
    }

    pub fn on_page_prev(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::PagePrev)
    }

    /// Jumps to the 1-based `page`; out-of-range pages are ignored.
    pub fn on_page_requested(&mut self, page: usize) -> Vec<Effect> {
        self.dispatch(Msg::PageRequested(page))
    }

    pub fn on_item_selected(&mut self, id: RecordId) -> Vec<Effect> {
        self.dispatch(Msg::ItemSelected(id))
    }

    pub fn on_detail_closed(&mut self) -> Vec<Effect> {
        self.dispatch(Msg::DetailClosed)
    }

    pub fn on_dropdown(&mut self, input: DropdownInput) -> Vec<Effect> {
        self.dispatch(Msg::Dropdown(input))
    }
}
