//! Axum extractors for request handling
//!
//! Custom extractors for validated bodies, query strings and path ids.

mod path;
mod query;
mod validated;

pub use path::RecordIdPath;
pub use query::QueryParams;
pub use validated::ValidatedJson;
