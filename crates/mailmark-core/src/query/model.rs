//! Query definition types.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::Error;

/// Group of query definitions, each backed by its own provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// User-defined saved searches.
    Bookmark,
    /// Folder shortcuts with a search implied by their path.
    Maildir,
}

impl Category {
    /// All categories, in the order items are concatenated.
    pub const ALL: [Self; 2] = [Self::Bookmark, Self::Maildir];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bookmark => "bookmark",
            Self::Maildir => "maildir",
        }
    }

    /// Index of this category's slot in per-category storage.
    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Bookmark => 0,
            Self::Maildir => 1,
        }
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bookmark" | "bookmarks" => Ok(Self::Bookmark),
            "maildir" | "maildirs" => Ok(Self::Maildir),
            other => Err(Error::InvalidArgument(format!("unknown category: {other}"))),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query string as written in configuration.
///
/// Queries built from filesystem names may not be valid UTF-8, so the raw
/// bytes are kept until normalization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum QueryLiteral {
    /// Query text.
    Text(String),
    /// Undecoded query bytes.
    Bytes(Vec<u8>),
}

impl From<&str> for QueryLiteral {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for QueryLiteral {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<u8>> for QueryLiteral {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Computes a query on demand.
pub type QuerySupplier = Arc<dyn Fn() -> QueryLiteral + Send + Sync>;

/// Where a bookmark's query comes from.
#[derive(Clone)]
pub enum QuerySource {
    /// The query itself.
    Literal(QueryLiteral),
    /// Deprecated: a function returning the query, called at normalization.
    Supplier(QuerySupplier),
}

impl QuerySource {
    /// Wrap a supplier function.
    pub fn supplier<F>(f: F) -> Self
    where
        F: Fn() -> QueryLiteral + Send + Sync + 'static,
    {
        Self::Supplier(Arc::new(f))
    }
}

impl fmt::Debug for QuerySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(literal) => f.debug_tuple("Literal").field(literal).finish(),
            Self::Supplier(_) => f.write_str("Supplier(..)"),
        }
    }
}

impl From<QueryLiteral> for QuerySource {
    fn from(literal: QueryLiteral) -> Self {
        Self::Literal(literal)
    }
}

impl From<&str> for QuerySource {
    fn from(s: &str) -> Self {
        Self::Literal(s.into())
    }
}

impl From<String> for QuerySource {
    fn from(s: String) -> Self {
        Self::Literal(s.into())
    }
}

impl<'de> Deserialize<'de> for QuerySource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        QueryLiteral::deserialize(deserializer).map(Self::Literal)
    }
}

/// A saved search or maildir shortcut, as supplied by a definition provider.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryDefinition {
    /// Display name.
    pub name: Option<String>,
    /// Query for bookmarks. Unused for maildir shortcuts.
    pub query: Option<QuerySource>,
    /// Folder path for maildir shortcuts.
    pub maildir: Option<String>,
    /// Shortcut key.
    pub key: Option<char>,
    /// Whether this is the primary bookmark.
    pub favorite: bool,
    /// Hidden from listings and skipped when refreshing.
    pub hide: bool,
    /// Unread count is not shown, and the query is skipped when refreshing.
    pub hide_unread: bool,
}

impl QueryDefinition {
    /// Creates a bookmark definition.
    #[must_use]
    pub fn bookmark(name: impl Into<String>, query: impl Into<QuerySource>) -> Self {
        Self {
            name: Some(name.into()),
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Creates a maildir shortcut definition.
    #[must_use]
    pub fn maildir(path: impl Into<String>) -> Self {
        Self {
            maildir: Some(path.into()),
            ..Self::default()
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the shortcut key.
    #[must_use]
    pub const fn with_key(mut self, key: char) -> Self {
        self.key = Some(key);
        self
    }

    /// Marks the definition as favorite.
    #[must_use]
    pub const fn with_favorite(mut self) -> Self {
        self.favorite = true;
        self
    }

    /// Hides the definition.
    #[must_use]
    pub const fn with_hide(mut self) -> Self {
        self.hide = true;
        self
    }

    /// Hides the definition's unread count.
    #[must_use]
    pub const fn with_hide_unread(mut self) -> Self {
        self.hide_unread = true;
        self
    }

    /// Whether the definition takes part in refreshes.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        !self.hide && !self.hide_unread
    }
}
