use crate::{AppState, Effect, LoadPhase, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// UI events are only honoured once the catalog is `Ready`; the load messages
/// only while `Loading`.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let ready = state.phase() == LoadPhase::Ready;

    let effects = match msg {
        Msg::StartLoad => {
            if state.start_load() {
                let config = state.config();
                vec![Effect::LoadRange {
                    first: config.first_id,
                    last: config.last_id,
                    batch_size: config.batch_size,
                }]
            } else {
                Vec::new()
            }
        }
        Msg::LoadProgress { completed, total } => {
            state.apply_progress(completed, total);
            Vec::new()
        }
        Msg::RecordsLoaded(records) => {
            state.finish_load(records);
            Vec::new()
        }
        Msg::LoadFailed(reason) => {
            state.fail_load(reason);
            Vec::new()
        }
        Msg::SearchInput(text) if ready => {
            let delay = state.config().search_debounce;
            state.set_search_input(text.clone());
            vec![Effect::DebounceSearch { term: text, delay }]
        }
        Msg::SearchSettled(term) if ready => {
            state.apply_search(&term);
            Vec::new()
        }
        Msg::CategorySelected(category) if ready => {
            state.apply_category(&category);
            Vec::new()
        }
        Msg::Dropdown(input) if ready => {
            state.apply_dropdown(input);
            Vec::new()
        }
        Msg::LoadMoreRequested if ready => {
            state.reveal_more();
            Vec::new()
        }
        Msg::PageNext if ready => {
            state.change_page(|window| window.next_page());
            Vec::new()
        }
        Msg::PagePrev if ready => {
            state.change_page(|window| window.prev_page());
            Vec::new()
        }
        Msg::PageRequested(page) if ready => {
            state.change_page(|window| window.go_to_page(page));
            Vec::new()
        }
        Msg::ItemSelected(id) if ready => {
            state.select(id);
            Vec::new()
        }
        Msg::DetailClosed if ready => {
            state.close_detail();
            Vec::new()
        }
        Msg::SearchInput(_)
        | Msg::SearchSettled(_)
        | Msg::CategorySelected(_)
        | Msg::Dropdown(_)
        | Msg::LoadMoreRequested
        | Msg::PageNext
        | Msg::PagePrev
        | Msg::PageRequested(_)
        | Msg::ItemSelected(_)
        | Msg::DetailClosed
        | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
