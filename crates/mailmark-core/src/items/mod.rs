//! Query items: definitions joined with live counts and baseline deltas.
//!
//! Items are built per [`Category`](crate::Category) by [`build`], refined by
//! [`ensure_favorite`] for bookmarks, and memoized in an [`ItemCache`] until the
//! next invalidation.

pub mod aggregate;
mod cache;
mod model;

pub use aggregate::{build, ensure_favorite};
pub use cache::ItemCache;
pub use model::{QueryItem, display_counts};
