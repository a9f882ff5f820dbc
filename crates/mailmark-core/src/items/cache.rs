//! Per-category item cache.

use tracing::debug;

use super::model::QueryItem;
use crate::Result;
use crate::query::Category;

/// Memoized item lists, one slot per category.
///
/// Slots are only ever cleared by [`invalidate`](Self::invalidate); there is
/// no expiry.
#[derive(Debug, Clone, Default)]
pub struct ItemCache {
    slots: [Option<Vec<QueryItem>>; 2],
}

impl ItemCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached items for `category`, running `build` to fill the slot if it is
    /// empty.
    ///
    /// A failed build leaves the slot empty.
    ///
    /// # Errors
    ///
    /// Returns whatever error `build` returns.
    pub fn get_or_build<F>(&mut self, category: Category, build: F) -> Result<&[QueryItem]>
    where
        F: FnOnce() -> Result<Vec<QueryItem>>,
    {
        let slot = &mut self.slots[category.slot()];
        if slot.is_none() {
            let items = build()?;
            debug!(%category, items = items.len(), "Built query items");
            *slot = Some(items);
        }
        Ok(slot.as_deref().unwrap_or_default())
    }

    /// Cached items for `category`, without building.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&[QueryItem]> {
        self.slots[category.slot()].as_deref()
    }

    /// Whether `category` has cached items.
    #[must_use]
    pub const fn is_cached(&self, category: Category) -> bool {
        self.slots[category.slot()].is_some()
    }

    /// Drop all cached items.
    pub fn invalidate(&mut self) {
        self.slots = [None, None];
    }
}
