use std::sync::Once;
use std::time::Duration;

use catalog_core::{
    update, AppController, AppState, AppViewModel, CatalogConfig, DropdownInput, DropdownKey,
    Effect, LoadPhase, Msg, NamedRef, RawRecord, RawSprites, RawStat, RawTypeSlot, RenderSink,
    WindowMode, LOAD_FAILURE_MESSAGE,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

#[derive(Default)]
struct RecordingSink {
    views: Vec<AppViewModel>,
}

impl RenderSink for RecordingSink {
    fn render(&mut self, view: &AppViewModel) {
        self.views.push(view.clone());
    }
}

impl RecordingSink {
    fn last(&self) -> &AppViewModel {
        self.views.last().expect("at least one render")
    }
}

fn raw(id: u32, name: &str, types: &[&str]) -> RawRecord {
    RawRecord {
        id,
        name: name.to_string(),
        sprites: RawSprites::default(),
        types: types
            .iter()
            .map(|t| RawTypeSlot {
                kind: NamedRef {
                    name: t.to_string(),
                },
            })
            .collect(),
        stats: vec![RawStat {
            base_stat: 45,
            stat: NamedRef {
                name: "hp".to_string(),
            },
        }],
        abilities: Vec::new(),
        height: 7,
        weight: 69,
        base_experience: Some(64),
    }
}

fn small_config() -> CatalogConfig {
    CatalogConfig {
        first_id: 1,
        last_id: 8,
        batch_size: 3,
        items_per_page: 2,
        ..CatalogConfig::default()
    }
}

fn catalog() -> Vec<Option<RawRecord>> {
    vec![
        Some(raw(1, "bulbasaur", &["grass", "poison"])),
        Some(raw(2, "ivysaur", &["grass", "poison"])),
        None,
        Some(raw(4, "charmander", &["fire"])),
        Some(raw(5, "charmeleon", &["fire"])),
        None,
        Some(raw(7, "squirtle", &["water"])),
        Some(raw(8, "wartortle", &["water"])),
    ]
}

fn ready_controller() -> AppController<RecordingSink> {
    let mut controller = AppController::new(small_config(), RecordingSink::default());
    controller.start();
    controller.dispatch(Msg::RecordsLoaded(catalog()));
    controller
}

fn card_ids(view: &AppViewModel) -> Vec<u32> {
    view.cards.iter().map(|card| card.id).collect()
}

#[test]
fn start_load_requests_configured_range_once() {
    init_logging();
    let (state, effects) = update(AppState::with_config(small_config()), Msg::StartLoad);
    assert_eq!(
        effects,
        vec![Effect::LoadRange {
            first: 1,
            last: 8,
            batch_size: 3
        }]
    );
    let view = state.view();
    assert_eq!(view.phase, LoadPhase::Loading);
    assert_eq!(view.progress.map(|p| (p.completed, p.total)), Some((0, 8)));

    let (state, effects) = update(state, Msg::StartLoad);
    assert!(effects.is_empty());
    assert_eq!(state.phase(), LoadPhase::Loading);
}

#[test]
fn progress_is_reported_while_loading() {
    let mut controller = AppController::new(small_config(), RecordingSink::default());
    controller.start();
    controller.dispatch(Msg::LoadProgress {
        completed: 3,
        total: 8,
    });
    let progress = controller.sink().last().progress.expect("progress");
    assert_eq!((progress.completed, progress.total), (3, 8));
}

#[test]
fn loaded_records_skip_failures_and_reveal_first_page() {
    init_logging();
    let controller = ready_controller();
    let view = controller.sink().last();

    assert_eq!(view.phase, LoadPhase::Ready);
    assert_eq!(view.progress, None);
    assert_eq!(view.skipped_records, 2);
    assert_eq!(card_ids(view), vec![1, 2]);
    assert_eq!(view.window.total_count, 6);
    assert_eq!(view.page.total_pages, 3);
    assert_eq!(view.load_more.as_deref(), Some("Showing 2 of 6"));
    assert_eq!(
        view.dropdown.options,
        vec!["All Types", "fire", "grass", "poison", "water"]
    );
    assert_eq!(view.cards[0].number, "#001");
    assert_eq!(view.cards[0].preview, vec![("HP", Some(45)), ("ATK", None), ("DEF", None)]);
}

#[test]
fn working_set_is_sorted_by_id() {
    let mut controller = AppController::new(small_config(), RecordingSink::default());
    controller.start();
    controller.dispatch(Msg::RecordsLoaded(vec![
        Some(raw(8, "wartortle", &["water"])),
        Some(raw(1, "bulbasaur", &["grass"])),
        Some(raw(4, "charmander", &["fire"])),
    ]));
    let ids: Vec<u32> = controller
        .state()
        .filter()
        .working_set()
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![1, 4, 8]);
}

#[test]
fn all_fetches_failing_is_a_load_failure() {
    let mut controller = AppController::new(small_config(), RecordingSink::default());
    controller.start();
    controller.dispatch(Msg::RecordsLoaded(vec![None, None, None]));

    let view = controller.sink().last();
    assert_eq!(view.phase, LoadPhase::Error);
    let error = view.error.as_ref().expect("error view");
    assert_eq!(error.message, LOAD_FAILURE_MESSAGE);
    assert!(view.cards.is_empty());
}

#[test]
fn load_sequence_failure_moves_to_error_without_retry() {
    let mut controller = AppController::new(small_config(), RecordingSink::default());
    controller.start();
    let effects = controller.dispatch(Msg::LoadFailed("invalid id range 0..=8".to_string()));
    assert!(effects.is_empty());

    let view = controller.sink().last();
    assert_eq!(view.phase, LoadPhase::Error);
    assert_eq!(
        view.error.as_ref().and_then(|e| e.reason.as_deref()),
        Some("invalid id range 0..=8")
    );

    assert!(controller.start().is_empty());
    assert_eq!(controller.state().phase(), LoadPhase::Error);
}

#[test]
fn search_input_is_debounced_then_filters() {
    init_logging();
    let mut controller = ready_controller();
    let renders = controller.sink().views.len();

    let effects = controller.on_search_input("char");
    assert_eq!(
        effects,
        vec![Effect::DebounceSearch {
            term: "char".to_string(),
            delay: Duration::from_millis(300),
        }]
    );
    assert_eq!(controller.sink().views.len(), renders);

    controller.dispatch(Msg::SearchSettled("char".to_string()));
    let view = controller.sink().last();
    assert_eq!(card_ids(view), vec![4, 5]);
    assert_eq!(view.search_input, "char");
    assert_eq!(view.load_more, None);
}

#[test]
fn search_matches_single_record_by_name() {
    let mut controller = AppController::new(small_config(), RecordingSink::default());
    controller.start();
    controller.dispatch(Msg::RecordsLoaded(vec![
        Some(raw(4, "Charmander", &["fire"])),
        Some(raw(7, "Squirtle", &["water"])),
    ]));
    controller.dispatch(Msg::SearchSettled("char".to_string()));
    assert_eq!(card_ids(controller.sink().last()), vec![4]);
}

#[test]
fn dropdown_keyboard_selection_filters_by_category() {
    let mut controller = ready_controller();

    controller.on_dropdown(DropdownInput::Key(DropdownKey::ArrowDown));
    assert!(controller.sink().last().dropdown.open);

    controller.on_dropdown(DropdownInput::Key(DropdownKey::End));
    assert_eq!(controller.sink().last().dropdown.focused, Some(4));

    controller.on_dropdown(DropdownInput::Key(DropdownKey::Enter));
    let view = controller.sink().last();
    assert!(!view.dropdown.open);
    assert_eq!(view.dropdown.label, "water");
    assert_eq!(card_ids(view), vec![7, 8]);
    assert_eq!(controller.state().filter().state().category, "water");
}

#[test]
fn category_select_resets_window() {
    let mut controller = ready_controller();
    controller.on_load_more_requested();
    controller.on_category_select("grass");

    let view = controller.sink().last();
    assert_eq!(card_ids(view), vec![1, 2]);
    assert_eq!(view.window.displayed_count, 2);
    assert_eq!(view.page.current_page, 1);
    assert_eq!(view.dropdown.label, "grass");

    controller.on_category_select("");
    assert_eq!(controller.sink().last().dropdown.label, "All Types");
    assert_eq!(controller.sink().last().window.total_count, 6);
}

#[test]
fn unknown_category_leaves_selection_and_grid_alone() {
    let mut controller = ready_controller();
    controller.on_category_select("grass");
    let before = controller.sink().last().clone();
    let renders = controller.sink().views.len();

    controller.on_category_select("dragon");

    assert_eq!(controller.sink().views.len(), renders);
    assert_eq!(controller.state().filter().state().category, "grass");
    assert_eq!(controller.state().view(), before);
}

#[test]
fn page_requested_jumps_and_ignores_out_of_range() {
    let mut controller = ready_controller();
    controller.on_page_requested(2);
    let view = controller.sink().last();
    assert_eq!(view.page.current_page, 2);
    assert_eq!(card_ids(view), vec![4, 5]);

    let renders = controller.sink().views.len();
    controller.on_page_requested(0);
    controller.on_page_requested(4);
    assert_eq!(controller.sink().views.len(), renders);
    assert_eq!(controller.state().window().page_info().current_page, 2);
}

#[test]
fn load_more_accumulates_until_exhausted() {
    let mut controller = ready_controller();
    controller.on_load_more_requested();
    assert_eq!(card_ids(controller.sink().last()), vec![1, 2, 4, 5]);

    controller.on_load_more_requested();
    let view = controller.sink().last();
    assert_eq!(card_ids(view), vec![1, 2, 4, 5, 7, 8]);
    assert!(!view.window.has_more);
    assert_eq!(view.load_more, None);

    let renders = controller.sink().views.len();
    controller.on_load_more_requested();
    assert_eq!(controller.sink().views.len(), renders);
}

#[test]
fn paging_replaces_cards_and_rejects_out_of_range() {
    let mut controller = ready_controller();

    controller.on_page_next();
    let view = controller.sink().last();
    assert_eq!(view.mode, WindowMode::Page);
    assert_eq!(card_ids(view), vec![4, 5]);
    assert!(view.page.has_prev && view.page.has_next);

    controller.on_page_requested(3);
    assert_eq!(card_ids(controller.sink().last()), vec![7, 8]);

    let renders = controller.sink().views.len();
    controller.on_page_next();
    controller.dispatch(Msg::PageRequested(9));
    assert_eq!(controller.sink().views.len(), renders);

    controller.on_page_prev();
    assert_eq!(controller.sink().last().page.current_page, 2);
}

#[test]
fn selecting_an_item_opens_detail() {
    let mut controller = ready_controller();
    controller.on_item_selected(4);

    let detail = controller
        .sink()
        .last()
        .detail
        .clone()
        .expect("detail view");
    assert_eq!(detail.name, "charmander");
    assert_eq!(detail.height, "0.7 m");
    assert_eq!(detail.weight, "6.9 kg");
    assert_eq!(detail.experience, "64");
    assert_eq!(detail.accent.as_deref(), Some("fire"));
    assert_eq!(detail.stats.len(), 1);
    assert_eq!(detail.stats[0].label, "HP");
    assert_eq!(detail.stats[0].percent, 22.5);

    controller.on_detail_closed();
    assert_eq!(controller.sink().last().detail, None);
}

#[test]
fn selecting_unknown_or_failed_id_is_ignored() {
    let mut controller = ready_controller();
    let renders = controller.sink().views.len();
    controller.on_item_selected(3);
    controller.on_item_selected(999);
    controller.on_detail_closed();
    assert_eq!(controller.sink().views.len(), renders);
    assert!(controller.state().selected_record().is_none());
}

#[test]
fn closure_sink_receives_renders() {
    let mut phases = Vec::new();
    {
        let mut controller =
            AppController::new(small_config(), |view: &AppViewModel| phases.push(view.phase));
        controller.start();
        controller.dispatch(Msg::RecordsLoaded(catalog()));
    }
    assert_eq!(phases, vec![LoadPhase::Loading, LoadPhase::Ready]);
}
