use catalog_core::{Effect, Msg, RawRecord};
use catalog_engine::{EngineEvent, EngineHandle, FetchSettings, HttpRecordSource};
use catalog_logging::{catalog_debug, catalog_info, catalog_warn};

/// Runs core effects on the background engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle<RawRecord>,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> anyhow::Result<Self> {
        catalog_info!("Record source: {}", settings.base_url);
        let source = HttpRecordSource::<RawRecord>::new(settings)?;
        let engine = EngineHandle::new(source)?;
        Ok(Self { engine })
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadRange {
                    first,
                    last,
                    batch_size,
                } => {
                    catalog_info!(
                        "LoadRange first={} last={} batch_size={}",
                        first,
                        last,
                        batch_size
                    );
                    self.engine.load_range(first, last, batch_size);
                }
                Effect::DebounceSearch { term, delay } => {
                    catalog_debug!("DebounceSearch term_len={} delay={:?}", term.len(), delay);
                    self.engine.debounce_search(term, delay);
                }
            }
        }
    }

    /// Next pending engine event as a message, if any.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(map_event)
    }
}

fn map_event(event: EngineEvent<RawRecord>) -> Msg {
    match event {
        EngineEvent::Progress { completed, total } => Msg::LoadProgress { completed, total },
        EngineEvent::LoadCompleted { records } => Msg::RecordsLoaded(records),
        EngineEvent::LoadFailed { reason } => {
            catalog_warn!("Catalog load failed: {}", reason);
            Msg::LoadFailed(reason)
        }
        EngineEvent::SearchSettled { term } => Msg::SearchSettled(term),
    }
}
