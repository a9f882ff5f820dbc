//! Baseline snapshot storage.

use chrono::{DateTime, Utc};
use tracing::info;

use super::LiveResult;

/// Live results captured as the reference point for deltas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineSnapshot {
    /// Results at the time the snapshot was taken.
    pub results: Vec<LiveResult>,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
}

/// Holds the current baseline, if any.
///
/// Empty until the first delivery of live results; from then on it only
/// changes through an explicit [`seed`](Self::seed) or [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct BaselineStore {
    snapshot: Option<BaselineSnapshot>,
}

impl BaselineStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the baseline with `results`, timestamped now.
    pub fn seed(&mut self, results: &[LiveResult]) {
        let taken_at = Utc::now();
        info!(entries = results.len(), %taken_at, "Baseline seeded");
        self.snapshot = Some(BaselineSnapshot {
            results: results.to_vec(),
            taken_at,
        });
    }

    /// Forget the baseline.
    pub fn reset(&mut self) {
        if self.snapshot.take().is_some() {
            info!("Baseline cleared");
        }
    }

    /// The current baseline.
    #[must_use]
    pub const fn current(&self) -> Option<&BaselineSnapshot> {
        self.snapshot.as_ref()
    }

    /// Results in the current baseline, empty when there is none.
    #[must_use]
    pub fn results(&self) -> &[LiveResult] {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.results.as_slice())
            .unwrap_or_default()
    }

    /// When the current baseline was taken.
    #[must_use]
    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        self.snapshot.as_ref().map(|snapshot| snapshot.taken_at)
    }

    /// Whether a baseline exists.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.snapshot.is_some()
    }
}
