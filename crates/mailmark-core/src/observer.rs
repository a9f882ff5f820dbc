//! Change notification for query items.
//!
//! Observers are called synchronously, on the caller's thread, every time the
//! cached items are invalidated.
//!
//! # Example
//!
//! ```ignore
//! use mailmark_core::{ItemsObserver, QueryItems};
//!
//! struct Redraw {
//!     dirty: bool,
//! }
//!
//! impl ItemsObserver for Redraw {
//!     fn on_items_changed(&mut self) {
//!         self.dirty = true;
//!     }
//! }
//!
//! let id = items.subscribe(Redraw { dirty: false });
//! // ...
//! items.unsubscribe(id);
//! ```

use std::fmt;

/// Receives a callback whenever query items change.
///
/// Closures taking no arguments implement this trait.
pub trait ItemsObserver: Send {
    /// Called after the cached items were invalidated.
    fn on_items_changed(&mut self);
}

impl<F> ItemsObserver for F
where
    F: FnMut() + Send,
{
    fn on_items_changed(&mut self) {
        self();
    }
}

/// An observer that logs every change using tracing.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl ItemsObserver for LoggingObserver {
    fn on_items_changed(&mut self) {
        tracing::debug!("Query items changed");
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registered observers, notified in subscription order.
#[derive(Default)]
pub struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn ItemsObserver>)>,
}

impl Observers {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `observer`.
    pub fn subscribe(&mut self, observer: impl ItemsObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove the observer registered under `id`.
    ///
    /// Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Call every observer.
    pub fn notify(&mut self) {
        for (_, observer) in &mut self.entries {
            observer.on_items_changed();
        }
    }

    /// Number of registered observers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    fn counter() -> (Arc<AtomicUsize>, impl ItemsObserver + 'static) {
        let hits = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&hits);
        (hits, move || {
            observed.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn every_observer_is_notified() {
        let mut observers = Observers::new();
        let (a, observer_a) = counter();
        let (b, observer_b) = counter();
        observers.subscribe(observer_a);
        observers.subscribe(observer_b);
        observers.subscribe(LoggingObserver);

        observers.notify();
        observers.notify();

        assert_eq!(a.load(Ordering::SeqCst), 2);
        assert_eq!(b.load(Ordering::SeqCst), 2);
        assert_eq!(observers.len(), 3);
    }

    #[test]
    fn unsubscribed_observer_is_not_notified() {
        let mut observers = Observers::new();
        let (hits, observer) = counter();
        let id = observers.subscribe(observer);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        observers.notify();

        assert_eq!(hits.load(Ordering::SeqCst), 0);
        assert!(observers.is_empty());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut observers = Observers::new();
        let first = observers.subscribe(LoggingObserver);
        observers.unsubscribe(first);
        let second = observers.subscribe(LoggingObserver);
        assert_ne!(first, second);
    }
}
