//! # mailmark-core
//!
//! Unread and total counts for saved mail searches, with change tracking.
//!
//! This crate provides:
//! - **Query definitions** - bookmarks (saved searches) and maildir shortcuts
//! - **Normalization** - canonical query strings, including the deprecated
//!   computed-query form
//! - **Baseline deltas** - counts are compared against the first results
//!   received, so each item shows what changed since then
//! - **Item cache** - items are built lazily and kept until invalidated
//! - **Refresh coordination** - batched count requests, baseline seeding and
//!   change notification
//!
//! ## Example
//!
//! ```ignore
//! use mailmark_core::{Category, CommandService, QueryConfig, QueryItems};
//!
//! let config = QueryConfig::load(&QueryConfig::default_path()).await?;
//! let service = CommandService::new("mail-counts", vec!["--json".into()]);
//! let mut items = QueryItems::new(config, service);
//!
//! items.request_refresh().await?;
//! for item in items.items(Category::Bookmark)? {
//!     println!("{:?} {}", item.name, item.display_counts());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
pub mod coordinator;
mod error;
pub mod items;
pub mod observer;
pub mod query;
pub mod results;
pub mod service;

pub use config::{CommandConfig, QueryConfig};
pub use coordinator::{QueryItems, RefreshState};
pub use error::{Error, Result};
pub use items::{ItemCache, QueryItem, build, display_counts, ensure_favorite};
pub use observer::{ItemsObserver, LoggingObserver, Observers, SubscriptionId};
pub use query::{
    Category, QueryDefinition, QueryLiteral, QuerySource, QuerySupplier, maildir_query, normalize,
    resolve_query,
};
pub use results::{BaselineSnapshot, BaselineStore, LiveResult, ResultIndex, find};
pub use service::{CommandService, DefinitionProvider, ExecutionService, ServiceError};
