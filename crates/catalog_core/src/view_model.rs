use crate::dropdown::DropdownState;
use crate::normalize::{
    format_record_number, format_statistic_label, format_tenths, format_trait_name,
    stat_bar_percent,
};
use crate::state::{AppState, LoadPhase, LoadProgress, LOAD_FAILURE_MESSAGE};
use crate::window::{PageInfo, WindowInfo, WindowMode};
use crate::{DisplayRecord, Experience, RecordId};

/// Statistics shown on each card, with their short labels.
pub const CARD_PREVIEW_STATS: [(&str, &str); 3] =
    [("hp", "HP"), ("attack", "ATK"), ("defense", "DEF")];

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub phase: LoadPhase,
    pub progress: Option<LoadProgress>,
    pub skipped_records: usize,
    pub search_input: String,
    pub dropdown: DropdownView,
    pub cards: Vec<CardView>,
    pub mode: WindowMode,
    pub window: WindowInfo,
    pub page: PageInfo,
    pub load_more: Option<String>,
    pub detail: Option<DetailView>,
    pub error: Option<ErrorView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub label: String,
    pub options: Vec<String>,
    pub open: bool,
    pub focused: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: RecordId,
    pub number: String,
    pub name: String,
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub preview: Vec<(&'static str, Option<u32>)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: RecordId,
    pub name: String,
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub accent: Option<String>,
    pub stats: Vec<StatBarView>,
    pub height: String,
    pub weight: String,
    pub experience: String,
    pub traits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatBarView {
    pub label: String,
    pub value: u32,
    pub percent: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub message: String,
    pub reason: Option<String>,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    let window = state.window();
    let window_info = window.window_info();
    let dropdown = state.dropdown();
    let (open, focused) = match dropdown.state() {
        DropdownState::Closed => (false, None),
        DropdownState::Open { focus } => (true, focus),
    };

    AppViewModel {
        phase: state.phase(),
        progress: state.progress(),
        skipped_records: state.skipped(),
        search_input: state.search_input().to_string(),
        dropdown: DropdownView {
            label: dropdown.selected().label.clone(),
            options: dropdown
                .options()
                .iter()
                .map(|option| option.label.clone())
                .collect(),
            open,
            focused,
        },
        cards: window.visible().iter().map(card_view).collect(),
        mode: window.mode(),
        window: window_info,
        page: window.page_info(),
        load_more: (state.phase() == LoadPhase::Ready
            && window.mode() == WindowMode::Reveal
            && window_info.has_more)
            .then(|| {
                format!(
                    "Showing {} of {}",
                    window_info.displayed_count, window_info.total_count
                )
            }),
        detail: state
            .selected_record()
            .map(|record| detail_view(record, state.config().stat_bar_max)),
        error: (state.phase() == LoadPhase::Error).then(|| ErrorView {
            message: LOAD_FAILURE_MESSAGE.to_string(),
            reason: state.failure_reason().map(ToOwned::to_owned),
        }),
    }
}

pub fn card_view(record: &DisplayRecord) -> CardView {
    CardView {
        id: record.id,
        number: format_record_number(record.id),
        name: record.name.clone(),
        image: record.image.clone(),
        categories: record.categories.clone(),
        preview: CARD_PREVIEW_STATS
            .iter()
            .map(|&(key, label)| (label, record.statistic(key)))
            .collect(),
    }
}

pub fn detail_view(record: &DisplayRecord, stat_bar_max: u32) -> DetailView {
    DetailView {
        id: record.id,
        name: record.name.clone(),
        image: record.image.clone(),
        categories: record.categories.clone(),
        accent: record.primary_category().map(ToOwned::to_owned),
        stats: record
            .statistics
            .iter()
            .map(|stat| StatBarView {
                label: format_statistic_label(&stat.name),
                value: stat.value,
                percent: stat_bar_percent(stat.value, stat_bar_max),
            })
            .collect(),
        height: format!("{} m", format_tenths(record.measurements.height)),
        weight: format!("{} kg", format_tenths(record.measurements.weight)),
        experience: match record.experience {
            Experience::Known(xp) => xp.to_string(),
            Experience::Unknown => "Unknown".to_string(),
        },
        traits: record
            .traits
            .iter()
            .map(|name| format_trait_name(name))
            .collect(),
    }
}
