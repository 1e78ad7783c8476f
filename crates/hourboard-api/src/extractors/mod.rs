//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path ids, query strings, and validation.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::{AuthIdentity, AuthUser};
pub use path::DocumentPath;
pub use query::QueryParams;
pub use validated::ValidatedJson;
