//! HTML output for the embedding page.
//!
//! Uses Askama templates for rendering.
//!
//! # Modules
//!
//! - [`embed`] - Full-viewport iframe shell page

pub mod embed;

pub use embed::{EMBED_FRAME_ID, EmbedTemplate};
