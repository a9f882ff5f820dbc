//! Refresh coordination.
//!
//! [`QueryItems`] owns everything that outlives a single refresh: the
//! baseline, the item cache and the observers. It is driven by two events:
//! live results arriving from the execution service, and callers asking for
//! items.
//!
//! ```text
//! ┌──────────────┐  results arrived: seed baseline  ┌───────────────┐
//! │  NoBaseline  │ ───────────────────────────────→ │  HasBaseline  │ ──┐
//! └──────────────┘                                  └───────────────┘   │ results arrived:
//!        ↑                     reset()                      │   ↑       │ invalidate only
//!        └──────────────────────────────────────────────────┘   └───────┘
//! ```
//!
//! Every transition invalidates the item cache, notifies observers and
//! rebuilds the items for both categories.

use tracing::{debug, warn};

use crate::Result;
use crate::items::{ItemCache, QueryItem, build, ensure_favorite};
use crate::observer::{ItemsObserver, Observers, SubscriptionId};
use crate::query::{Category, resolve_query};
use crate::results::BaselineStore;
use crate::service::{DefinitionProvider, ExecutionService};

/// Whether deltas have a reference point yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    /// No results have arrived since start or the last reset.
    NoBaseline,
    /// Deltas are measured against the stored baseline.
    HasBaseline,
}

/// Query items for a definition provider and an execution service.
pub struct QueryItems<P, S> {
    provider: P,
    service: S,
    baseline: BaselineStore,
    cache: ItemCache,
    observers: Observers,
}

impl<P, S> QueryItems<P, S>
where
    P: DefinitionProvider,
    S: ExecutionService,
{
    /// Creates a coordinator with no baseline and an empty cache.
    pub fn new(provider: P, service: S) -> Self {
        Self {
            provider,
            service,
            baseline: BaselineStore::new(),
            cache: ItemCache::new(),
            observers: Observers::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> RefreshState {
        if self.baseline.is_seeded() {
            RefreshState::HasBaseline
        } else {
            RefreshState::NoBaseline
        }
    }

    /// The baseline deltas are measured against.
    #[must_use]
    pub const fn baseline(&self) -> &BaselineStore {
        &self.baseline
    }

    /// The definition provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// The definition provider, mutably.
    ///
    /// Changed definitions show up after the next invalidation.
    pub const fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// The execution service.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Register an observer of item changes.
    pub fn subscribe(&mut self, observer: impl ItemsObserver + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Items for `category`, built on first access after an invalidation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if a definition in the category
    /// cannot be resolved.
    pub fn items(&mut self, category: Category) -> Result<&[QueryItem]> {
        let Self {
            provider,
            service,
            baseline,
            cache,
            ..
        } = self;

        cache.get_or_build(category, || {
            let definitions = provider.definitions(category);
            let mut items = build(
                &definitions,
                category,
                service.live_results(),
                baseline.results(),
            )?;
            if category == Category::Bookmark {
                ensure_favorite(&mut items);
            }
            Ok(items)
        })
    }

    /// Items for the named category, or bookmarks followed by maildirs when
    /// `category` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] for an unknown category name,
    /// or [`crate::Error::Configuration`] if items cannot be built.
    pub fn query_items(&mut self, category: Option<&str>) -> Result<Vec<QueryItem>> {
        if let Some(name) = category {
            let category = name.parse::<Category>()?;
            return Ok(self.items(category)?.to_vec());
        }

        let mut all = self.items(Category::Bookmark)?.to_vec();
        all.extend_from_slice(self.items(Category::Maildir)?);
        Ok(all)
    }

    /// The favorite bookmark item.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if bookmark items cannot be
    /// built.
    pub fn favorite(&mut self) -> Result<Option<QueryItem>> {
        Ok(self
            .items(Category::Bookmark)?
            .iter()
            .find(|item| item.favorite)
            .cloned())
    }

    /// The first item, bookmarks before maildirs, whose query is `query`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if items cannot be built.
    pub fn find_item(&mut self, query: &str) -> Result<Option<QueryItem>> {
        for category in Category::ALL {
            if let Some(item) = self.items(category)?.iter().find(|item| item.query == query) {
                return Ok(Some(item.clone()));
            }
        }
        Ok(None)
    }

    /// Drop cached items and notify observers.
    pub fn invalidate(&mut self) {
        self.cache.invalidate();
        self.observers.notify();
    }

    /// Handle delivery of live results.
    ///
    /// The first delivery after start or [`reset`](Self::reset) becomes the
    /// baseline; later deliveries only invalidate.
    pub fn results_arrived(&mut self) {
        match self.state() {
            RefreshState::NoBaseline => {
                self.baseline.seed(self.service.live_results());
                self.invalidate();
            }
            RefreshState::HasBaseline => self.invalidate(),
        }
        self.rebuild();
    }

    /// Forget the baseline and cached items.
    pub fn reset(&mut self) {
        self.baseline.reset();
        self.invalidate();
        self.rebuild();
    }

    /// Normalized queries of all visible definitions, bookmarks first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if a visible definition cannot
    /// be resolved.
    pub fn visible_queries(&self) -> Result<Vec<String>> {
        let mut queries = Vec::new();
        for category in Category::ALL {
            for definition in self.provider.definitions(category) {
                if definition.is_visible() {
                    queries.push(resolve_query(&definition, category)?);
                }
            }
        }
        Ok(queries)
    }

    /// Ask the execution service for fresh counts of all visible queries and
    /// process the response.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] if a query cannot be resolved,
    /// or [`crate::Error::Service`] if the service fails. State is unchanged
    /// on error.
    pub async fn request_refresh(&mut self) -> Result<()> {
        let queries = self.visible_queries()?;
        debug!(queries = queries.len(), "Requesting query counts");
        self.service.submit(queries).await?;
        self.results_arrived();
        Ok(())
    }

    /// Refresh, optionally starting over with a new baseline.
    ///
    /// # Errors
    ///
    /// See [`request_refresh`](Self::request_refresh).
    pub async fn refresh(&mut self, reset_baseline: bool) -> Result<()> {
        if reset_baseline {
            self.reset();
        }
        self.request_refresh().await
    }

    /// Repopulate the cache right away.
    ///
    /// Failures are only logged; the next call to [`items`](Self::items)
    /// reports them.
    fn rebuild(&mut self) {
        for category in Category::ALL {
            if let Err(e) = self.items(category) {
                warn!(%category, error = %e, "Failed to rebuild query items");
            }
        }
    }
}

impl<P, S> std::fmt::Debug for QueryItems<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryItems")
            .field("baseline", &self.baseline)
            .field("cache", &self.cache)
            .field("observers", &self.observers)
            .finish_non_exhaustive()
    }
}
