//! Business logic services for the application layer.

pub mod embed_service;
pub mod route_resolver;

pub use embed_service::{DEFAULT_PAGE_TITLE, EmbedService};
pub use route_resolver::{DEFAULT_MOUNT_PREFIX, RouteResolver};
