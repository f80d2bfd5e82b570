//! Helpers for query-string merging and base URL normalization.
//!
//! - [`query`] - Forwarding page query parameters with the embedded flag set
//! - [`url_normalizer`] - Canonical form for the configured default base URL

pub mod query;
pub mod url_normalizer;

pub use query::{EMBEDDED_PARAM, with_embedded_flag};
pub use url_normalizer::normalize_base_url;
