//! # Stats Embed
//!
//! Maps stats page paths to the dashboard app that serves them and embeds the
//! app in a full-viewport iframe, forwarding the page query with
//! `embedded=true` set.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Route table and page location
//! - **Application Layer** ([`application`]) - Route resolution and page building
//! - **Web Layer** ([`web`]) - Askama template for the iframe shell page
//!
//! ## Routing
//!
//! | Path   | Iframe URL                                              |
//! |--------|---------------------------------------------------------|
//! | `/`    | `https://synthetix.streamlit.app/?{query}`              |
//! | `/all` | `https://synthetix-all.streamlit.app/?{query}`          |
//! | other  | `https://synthetix.streamlit.app{path}?{query}`         |
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod utils;
pub mod web;

pub use error::EmbedError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{EmbedService, RouteResolver};
    pub use crate::config::Config;
    pub use crate::domain::{Location, RouteTable, RouteTarget};
    pub use crate::error::EmbedError;
    pub use crate::web::EmbedTemplate;
}
