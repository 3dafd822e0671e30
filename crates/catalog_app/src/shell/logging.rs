use std::str::FromStr;

use catalog_logging::LogDestination;
use log::LevelFilter;

/// Environment variable holding the log level, e.g. `CATALOG_LOG=debug`.
pub const LOG_LEVEL_VAR: &str = "CATALOG_LOG";

pub fn initialize() {
    let level = level_from(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
    catalog_logging::initialize(LogDestination::File, level);
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|raw| LevelFilter::from_str(raw.trim()).ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(level_from(Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(level_from(Some("off")), LevelFilter::Off);
    }

    #[test]
    fn falls_back_to_info() {
        assert_eq!(level_from(None), LevelFilter::Info);
        assert_eq!(level_from(Some("chatty")), LevelFilter::Info);
    }
}
