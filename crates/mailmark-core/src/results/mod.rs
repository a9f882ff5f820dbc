//! Live search results and the baseline they are compared against.

mod baseline;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use baseline::{BaselineSnapshot, BaselineStore};

/// Counts reported by the execution service for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveResult {
    /// Canonical query string the counts belong to.
    pub query: String,
    /// Number of matching messages.
    pub count: u32,
    /// Number of matching unread messages.
    pub unread: u32,
}

impl LiveResult {
    /// Creates a result entry.
    #[must_use]
    pub fn new(query: impl Into<String>, count: u32, unread: u32) -> Self {
        Self {
            query: query.into(),
            count,
            unread,
        }
    }
}

/// Find the entry for `query` in `dataset`.
///
/// Linear scan; the first exact match wins. Datasets hold a few dozen
/// entries, so this stays cheap. Use [`ResultIndex`] when looking up many
/// queries against a large dataset.
#[must_use]
pub fn find<'a>(query: &str, dataset: &'a [LiveResult]) -> Option<&'a LiveResult> {
    dataset.iter().find(|result| result.query == query)
}

/// Hashed lookup over a dataset, equivalent to [`find`].
#[derive(Debug, Default)]
pub struct ResultIndex<'a> {
    by_query: HashMap<&'a str, &'a LiveResult>,
}

impl<'a> ResultIndex<'a> {
    /// Index `dataset`, keeping the first entry for each query.
    #[must_use]
    pub fn new(dataset: &'a [LiveResult]) -> Self {
        let mut by_query = HashMap::with_capacity(dataset.len());
        for result in dataset {
            by_query.entry(result.query.as_str()).or_insert(result);
        }
        Self { by_query }
    }

    /// Look up the entry for `query`.
    #[must_use]
    pub fn get(&self, query: &str) -> Option<&'a LiveResult> {
        self.by_query.get(query).copied()
    }

    /// Number of distinct queries indexed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_query.len()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_query.is_empty()
    }
}
