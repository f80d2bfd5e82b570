//! Application layer services.
//!
//! # Available Services
//!
//! - [`services::route_resolver::RouteResolver`] - Maps a page location to the
//!   embedded app URL
//! - [`services::embed_service::EmbedService`] - Resolves a location and renders
//!   the iframe shell page for it

pub mod services;
