//! Query normalization.
//!
//! Turns a definition into the canonical query string used to look up live
//! results. The same string is sent to the execution service, so lookups are
//! exact string comparisons.

use tracing::warn;

use super::model::{Category, QueryDefinition, QueryLiteral, QuerySource};
use crate::{Error, Result};

/// Resolve a bookmark definition's query to a UTF-8 string.
///
/// Supplier queries are deprecated; they are still honored but logged.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the definition is absent, has no
/// query, or its query bytes are not valid UTF-8.
pub fn normalize(definition: Option<&QueryDefinition>) -> Result<String> {
    let definition = definition.ok_or_else(|| Error::config("query definition is missing"))?;

    match &definition.query {
        None => Err(Error::config(format!(
            "no query for definition {}",
            describe(definition)
        ))),
        Some(QuerySource::Literal(literal)) => decode(literal),
        Some(QuerySource::Supplier(supplier)) => {
            warn!(
                definition = %describe(definition),
                "query functions are deprecated; use a query string"
            );
            decode(&supplier())
        }
    }
}

/// The query implied by a maildir path.
#[must_use]
pub fn maildir_query(path: &str) -> String {
    format!("maildir:\"{path}\"")
}

/// Resolve the canonical query of a definition within `category`.
///
/// # Errors
///
/// Returns [`Error::Configuration`] if the query cannot be resolved, or if a
/// maildir shortcut has no path.
pub fn resolve_query(definition: &QueryDefinition, category: Category) -> Result<String> {
    match category {
        Category::Bookmark => normalize(Some(definition)),
        Category::Maildir => definition
            .maildir
            .as_deref()
            .map(maildir_query)
            .ok_or_else(|| {
                Error::config(format!(
                    "maildir shortcut {} has no path",
                    describe(definition)
                ))
            }),
    }
}

fn decode(literal: &QueryLiteral) -> Result<String> {
    match literal {
        QueryLiteral::Text(text) => Ok(text.clone()),
        QueryLiteral::Bytes(bytes) => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| Error::config(format!("query is not valid UTF-8: {e}"))),
    }
}

fn describe(definition: &QueryDefinition) -> String {
    definition
        .name
        .as_deref()
        .or(definition.maildir.as_deref())
        .map_or_else(|| "<unnamed>".to_string(), |name| format!("'{name}'"))
}
