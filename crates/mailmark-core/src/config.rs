//! Query configuration file.
//!
//! A JSON document listing bookmarks, maildir shortcuts and the search command:
//!
//! ```json
//! {
//!   "bookmarks": [
//!     { "name": "Unread", "query": "flag:unread AND NOT flag:trashed", "key": "u" },
//!     { "name": "Today", "query": "date:today..now", "key": "t", "favorite": true }
//!   ],
//!   "maildirs": [
//!     { "maildir": "/Inbox", "key": "i" },
//!     { "maildir": "/Archive", "hide_unread": true }
//!   ],
//!   "command": { "program": "mail-counts", "args": ["--json"] },
//!   "refresh_interval_secs": 300
//! }
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::Result;
use crate::query::{Category, QueryDefinition, resolve_query};
use crate::service::DefinitionProvider;

/// External program used to run searches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandConfig {
    /// Program to run.
    pub program: String,
    /// Arguments placed before the queries.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Query definitions and refresh settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Saved searches.
    pub bookmarks: Vec<QueryDefinition>,
    /// Maildir shortcuts.
    pub maildirs: Vec<QueryDefinition>,
    /// Search command.
    pub command: Option<CommandConfig>,
    /// Seconds between refreshes; 0 refreshes once.
    pub refresh_interval_secs: u64,
}

impl QueryConfig {
    /// Default configuration file location.
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mailmark")
            .join("queries.json")
    }

    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid configuration JSON.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            bookmarks = config.bookmarks.len(),
            maildirs = config.maildirs.len(),
            "Loaded query configuration from {}",
            path.display()
        );
        Ok(config)
    }

    /// Check that every definition resolves to a query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Configuration`] for the first definition that
    /// does not.
    pub fn validate(&self) -> Result<()> {
        for category in Category::ALL {
            for definition in self.definitions(category) {
                resolve_query(&definition, category)?;
            }
        }
        Ok(())
    }

    /// Interval between refreshes, if periodic refresh is enabled.
    #[must_use]
    pub const fn refresh_interval(&self) -> Option<Duration> {
        match self.refresh_interval_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl DefinitionProvider for QueryConfig {
    fn bookmarks(&self) -> Vec<QueryDefinition> {
        self.bookmarks.clone()
    }

    fn maildirs(&self) -> Vec<QueryDefinition> {
        self.maildirs.clone()
    }
}
