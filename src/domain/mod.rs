//! Domain layer: the route table and the location being resolved.
//!
//! # Modules
//!
//! - [`route`] - [`RouteTarget`] and the static [`RouteTable`]
//! - [`location`] - Browser location (path + query) used as resolver input
//!
//! The domain layer holds plain data only. Resolution lives in
//! [`crate::application::services::RouteResolver`].

pub mod location;
pub mod route;

pub use location::Location;
pub use route::{RouteTable, RouteTarget};
