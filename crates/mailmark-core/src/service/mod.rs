//! Boundaries to the outside world.
//!
//! Query definitions come from a [`DefinitionProvider`]; counts come from an
//! [`ExecutionService`] that runs the searches. Both are traits so the
//! coordinator can be driven by configuration files and external commands in
//! the binary, and by in-memory fakes in tests.

pub mod command;

use std::future::Future;

use crate::query::{Category, QueryDefinition};
use crate::results::LiveResult;

pub use command::CommandService;

/// Errors reported by an execution service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The search command could not be started.
    #[error("Failed to run search command: {0}")]
    Spawn(#[source] std::io::Error),

    /// The search command exited unsuccessfully.
    #[error("Search command exited with {status}: {stderr}")]
    Exit {
        /// Exit status as reported by the OS.
        status: String,
        /// Trimmed standard error output.
        stderr: String,
    },

    /// The response could not be parsed.
    #[error("Invalid search response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// Any other backend failure.
    #[error("Search backend unavailable: {0}")]
    Unavailable(String),
}

/// Source of bookmark and maildir shortcut definitions.
///
/// Read on every item build; implementations should return the current
/// definitions rather than a snapshot taken at construction.
pub trait DefinitionProvider {
    /// Bookmark definitions, in display order.
    fn bookmarks(&self) -> Vec<QueryDefinition>;

    /// Maildir shortcut definitions, in display order.
    fn maildirs(&self) -> Vec<QueryDefinition>;

    /// Definitions for `category`.
    fn definitions(&self, category: Category) -> Vec<QueryDefinition> {
        match category {
            Category::Bookmark => self.bookmarks(),
            Category::Maildir => self.maildirs(),
        }
    }
}

/// Runs batches of queries and keeps the most recent counts.
pub trait ExecutionService {
    /// Counts from the most recently delivered response.
    fn live_results(&self) -> &[LiveResult];

    /// Run `queries` as one batch.
    ///
    /// Resolves once the response has been delivered and is visible through
    /// [`live_results`](Self::live_results).
    fn submit(
        &mut self,
        queries: Vec<String>,
    ) -> impl Future<Output = Result<(), ServiceError>> + Send;
}
