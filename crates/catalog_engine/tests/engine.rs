use std::time::{Duration, Instant};

use catalog_engine::{EngineEvent, EngineHandle, FailureKind, FetchError, RecordId, RecordSource};

struct EvenIdsOnly;

#[async_trait::async_trait]
impl RecordSource for EvenIdsOnly {
    type Record = RecordId;

    async fn get_record(&self, id: RecordId) -> Result<RecordId, FetchError> {
        if id % 2 == 0 {
            Ok(id)
        } else {
            Err(FetchError::new(id, FailureKind::Network, "unreachable"))
        }
    }
}

fn drain_until<T>(
    engine: &EngineHandle<T>,
    done: impl Fn(&EngineEvent<T>) -> bool,
) -> Vec<EngineEvent<T>>
where
    T: Send + 'static,
{
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut events = Vec::new();
    while Instant::now() < deadline {
        if let Some(event) = engine.recv_timeout(Duration::from_millis(50)) {
            let finished = done(&event);
            events.push(event);
            if finished {
                break;
            }
        }
    }
    events
}

#[test]
fn load_reports_progress_then_completion() {
    catalog_logging::initialize_for_tests();
    let engine = EngineHandle::new(EvenIdsOnly).expect("engine");
    engine.load_range(1, 5, 2);

    let events = drain_until(&engine, |event| {
        matches!(event, EngineEvent::LoadCompleted { .. })
    });
    assert_eq!(
        events,
        vec![
            EngineEvent::Progress {
                completed: 2,
                total: 5
            },
            EngineEvent::Progress {
                completed: 4,
                total: 5
            },
            EngineEvent::Progress {
                completed: 5,
                total: 5
            },
            EngineEvent::LoadCompleted {
                records: vec![None, Some(2), None, Some(4), None],
            },
        ]
    );
}

#[test]
fn invalid_range_reports_load_failure() {
    let engine = EngineHandle::new(EvenIdsOnly).expect("engine");
    engine.load_range(0, 5, 2);

    let events = drain_until(&engine, |event| {
        matches!(event, EngineEvent::LoadFailed { .. })
    });
    assert_eq!(
        events,
        vec![EngineEvent::LoadFailed {
            reason: "invalid id range 0..=5".to_string()
        }]
    );
}

#[test]
fn only_last_search_within_window_settles() {
    let engine = EngineHandle::new(EvenIdsOnly).expect("engine");
    for term in ["b", "bu", "bul"] {
        engine.debounce_search(term, Duration::from_millis(100));
    }

    let events = drain_until(&engine, |event| {
        matches!(event, EngineEvent::SearchSettled { .. })
    });
    assert_eq!(
        events,
        vec![EngineEvent::SearchSettled {
            term: "bul".to_string()
        }]
    );
    assert!(engine.recv_timeout(Duration::from_millis(300)).is_none());
}
