use catalog_core::{AppViewModel, CardView, DetailView, LoadPhase, WindowMode};

const BAR_WIDTH: usize = 20;

/// Renders one frame of the catalog as plain text lines.
pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec![status_line(view)];

    if let Some(error) = &view.error {
        lines.push(error.message.clone());
        if let Some(reason) = &error.reason {
            lines.push(format!("  cause: {reason}"));
        }
        return lines;
    }
    if view.phase != LoadPhase::Ready {
        return lines;
    }

    lines.push(dropdown_line(view));
    if view.dropdown.open {
        for (index, option) in view.dropdown.options.iter().enumerate() {
            let marker = if view.dropdown.focused == Some(index) {
                '>'
            } else {
                ' '
            };
            lines.push(format!("  {marker} [{index}] {option}"));
        }
    }

    if view.cards.is_empty() {
        lines.push("No records match the current filters.".to_string());
    } else {
        lines.extend(view.cards.iter().map(format_card));
    }

    match view.mode {
        WindowMode::Reveal => {
            if let Some(load_more) = &view.load_more {
                lines.push(format!("{load_more} (type 'more')"));
            }
        }
        WindowMode::Page => lines.push(format!(
            "Page {} of {}{}{}",
            view.page.current_page,
            view.page.total_pages,
            if view.page.has_prev { " | prev" } else { "" },
            if view.page.has_next { " | next" } else { "" },
        )),
    }

    if let Some(detail) = &view.detail {
        lines.push(String::new());
        lines.extend(format_detail(detail));
    }
    lines
}

fn status_line(view: &AppViewModel) -> String {
    match view.phase {
        LoadPhase::Idle => "Catalog idle".to_string(),
        LoadPhase::Loading => match view.progress {
            Some(progress) => format!(
                "Loading records... {}/{}",
                progress.completed, progress.total
            ),
            None => "Loading records...".to_string(),
        },
        LoadPhase::Ready => {
            let mut line = match view.mode {
                WindowMode::Reveal => format!(
                    "{} of {} records shown",
                    view.window.displayed_count, view.window.total_count
                ),
                WindowMode::Page => format!(
                    "{} records on page {} of {} ({} total)",
                    view.cards.len(),
                    view.page.current_page,
                    view.page.total_pages,
                    view.window.total_count
                ),
            };
            if view.skipped_records > 0 {
                line.push_str(&format!(" ({} failed to load)", view.skipped_records));
            }
            line
        }
        LoadPhase::Error => "Load failed".to_string(),
    }
}

fn dropdown_line(view: &AppViewModel) -> String {
    let search = if view.search_input.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", view.search_input)
    };
    format!("Search: {search} | Type: {}", view.dropdown.label)
}

fn format_card(card: &CardView) -> String {
    let preview = card
        .preview
        .iter()
        .map(|(label, value)| match value {
            Some(value) => format!("{label} {value}"),
            None => format!("{label} -"),
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{} {} [{}] {}",
        card.number,
        card.name,
        card.categories.join("/"),
        preview
    )
}

fn format_detail(detail: &DetailView) -> Vec<String> {
    let mut lines = vec![format!(
        "== {} {} [{}] ==",
        catalog_core::format_record_number(detail.id),
        detail.name,
        detail.categories.join("/")
    )];
    if let Some(image) = &detail.image {
        lines.push(format!("image: {image}"));
    }
    for stat in &detail.stats {
        lines.push(format!(
            "{:<8} {:>3} {}",
            stat.label,
            stat.value,
            stat_bar(stat.percent)
        ));
    }
    lines.push(format!(
        "height {} | weight {} | base exp {}",
        detail.height, detail.weight, detail.experience
    ));
    if !detail.traits.is_empty() {
        lines.push(format!("abilities: {}", detail.traits.join(", ")));
    }
    lines.push("(type 'close' to dismiss)".to_string());
    lines
}

fn stat_bar(percent: f32) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f32).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
