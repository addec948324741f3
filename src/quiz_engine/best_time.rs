use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, warn};

/// Record key under which the best completed-session time is persisted.
pub const BEST_TIME_KEY: &str = "mathGameBestTime";

/// The persistence collaborator: a plain key-value surface holding text
/// records. The best time is stored as a decimal-seconds float serialized as
/// text; this crate never owns where the records actually live.
pub trait RecordStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and embedders with their own persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.records.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.records.insert(key.to_string(), value.to_string());
    }
}

/// Outcome of comparing a completed session against the stored best time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BestTimeOutcome {
    /// This run beat the record (or no valid record existed); it is now stored.
    NewBest { elapsed_secs: f64 },
    /// The stored record stands.
    NoImprovement { best_secs: f64 },
}

impl BestTimeOutcome {
    /// The value a results screen should display as the best time.
    pub fn display_secs(&self) -> f64 {
        match *self {
            BestTimeOutcome::NewBest { elapsed_secs }    => elapsed_secs,
            BestTimeOutcome::NoImprovement { best_secs } => best_secs,
        }
    }

    pub fn is_new_best(&self) -> bool {
        matches!(self, BestTimeOutcome::NewBest { .. })
    }
}

/// Compare `elapsed` against the persisted best time and update the record on
/// strict improvement.
///
/// An absent, unparseable, or non-finite stored value degrades to "no prior
/// best", so the current run wins by default. Called once per completed
/// session; across any sequence of sessions the stored value is
/// non-increasing.
pub fn record_elapsed(store: &mut dyn RecordStore, elapsed: Duration) -> BestTimeOutcome {
    let elapsed_secs = elapsed.as_secs_f64();

    let prior = store.get(BEST_TIME_KEY).and_then(|raw| match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!(target: "best_time", raw = %raw, "stored best time unreadable, treating as absent");
            None
        }
    });

    match prior {
        Some(best_secs) if elapsed_secs >= best_secs => {
            debug!(target: "best_time", elapsed_secs, best_secs, "no improvement");
            BestTimeOutcome::NoImprovement { best_secs }
        }
        _ => {
            store.set(BEST_TIME_KEY, &elapsed_secs.to_string());
            info!(target: "best_time", elapsed_secs, "new best time recorded");
            BestTimeOutcome::NewBest { elapsed_secs }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get(BEST_TIME_KEY), None);
        store.set(BEST_TIME_KEY, "3.5");
        assert_eq!(store.get(BEST_TIME_KEY).as_deref(), Some("3.5"));
    }

    #[test]
    fn equal_time_is_not_an_improvement() {
        let mut store = MemoryStore::new();
        record_elapsed(&mut store, Duration::from_secs(5));
        let outcome = record_elapsed(&mut store, Duration::from_secs(5));
        assert_eq!(outcome, BestTimeOutcome::NoImprovement { best_secs: 5.0 });
    }

    #[test]
    fn non_finite_stored_value_is_treated_as_absent() {
        let mut store = MemoryStore::new();
        store.set(BEST_TIME_KEY, "NaN");
        let outcome = record_elapsed(&mut store, Duration::from_secs(8));
        assert!(outcome.is_new_best());
        let stored: f64 = store.get(BEST_TIME_KEY).unwrap().parse().unwrap();
        assert_eq!(stored, 8.0);
    }
}
