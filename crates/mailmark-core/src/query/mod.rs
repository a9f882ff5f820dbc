//! Query definitions and their canonical query strings.

mod model;
mod normalize;

pub use model::{Category, QueryDefinition, QueryLiteral, QuerySource, QuerySupplier};
pub use normalize::{maildir_query, normalize, resolve_query};
