use crate::record::{DisplayRecord, Experience, Measurements, RawRecord, Statistic};

/// Maps a fetched record into its display model.
///
/// `None` stands for a failed fetch and is passed through unchanged.
pub fn normalize(raw: Option<RawRecord>) -> Option<DisplayRecord> {
    raw.map(normalize_record)
}

pub fn normalize_record(raw: RawRecord) -> DisplayRecord {
    let RawRecord {
        id,
        name,
        sprites,
        types,
        stats,
        abilities,
        height,
        weight,
        base_experience,
    } = raw;

    let artwork = sprites
        .other
        .and_then(|other| other.official_artwork)
        .and_then(|artwork| artwork.front_default)
        .filter(|url| !url.is_empty());
    let image = artwork.or(sprites.front_default.filter(|url| !url.is_empty()));

    DisplayRecord {
        id,
        name,
        image,
        categories: types.into_iter().map(|slot| slot.kind.name).collect(),
        measurements: Measurements { height, weight },
        statistics: stats
            .into_iter()
            .map(|stat| Statistic {
                name: stat.stat.name,
                value: stat.base_stat,
            })
            .collect(),
        traits: abilities.into_iter().map(|slot| slot.ability.name).collect(),
        // Zero is how the source spells "not recorded".
        experience: match base_experience {
            Some(xp) if xp > 0 => Experience::Known(xp),
            _ => Experience::Unknown,
        },
    }
}

/// Short display label for a statistic key. Unknown keys pass through.
pub fn format_statistic_label(name: &str) -> String {
    let label = match name {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Atk",
        "special-defense" => "Sp. Def",
        "speed" => "Speed",
        other => other,
    };
    label.to_string()
}

/// `"swift-swim"` becomes `"Swift Swim"`.
pub fn format_trait_name(name: &str) -> String {
    name.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Width of a statistic bar in percent of `max`, clamped to 100.
pub fn stat_bar_percent(value: u32, max: u32) -> f32 {
    if max == 0 {
        return 100.0;
    }
    (value as f32 * 100.0 / max as f32).min(100.0)
}

/// Scaled integer (tenths) rendered with one decimal, e.g. `69` -> `"6.9"`.
pub fn format_tenths(scaled: u32) -> String {
    format!("{}.{}", scaled / 10, scaled % 10)
}

pub fn format_record_number(id: u32) -> String {
    format!("#{id:03}")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_names_are_title_cased_per_token() {
        assert_eq!(format_trait_name("swift-swim"), "Swift Swim");
        assert_eq!(format_trait_name("overgrow"), "Overgrow");
        assert_eq!(format_trait_name("a--b"), "A  B");
    }

    #[test]
    fn statistic_labels_use_lookup_table() {
        assert_eq!(format_statistic_label("special-attack"), "Sp. Atk");
        assert_eq!(format_statistic_label("hp"), "HP");
        assert_eq!(format_statistic_label("accuracy"), "accuracy");
    }

    #[test]
    fn stat_bar_is_clamped() {
        assert_eq!(stat_bar_percent(100, 200), 50.0);
        assert_eq!(stat_bar_percent(255, 200), 100.0);
        assert_eq!(stat_bar_percent(0, 200), 0.0);
    }

    #[test]
    fn tenths_and_record_numbers() {
        assert_eq!(format_tenths(7), "0.7");
        assert_eq!(format_tenths(69), "6.9");
        assert_eq!(format_tenths(1000), "100.0");
        assert_eq!(format_record_number(4), "#004");
        assert_eq!(format_record_number(1234), "#1234");
    }
}
