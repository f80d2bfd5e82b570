//! Embedding page service.

use crate::application::services::RouteResolver;
use crate::domain::Location;
use crate::error::EmbedError;
use crate::web::EmbedTemplate;
use askama::Template;

/// Default page and iframe title.
pub const DEFAULT_PAGE_TITLE: &str = "Synthetix Stats";

/// Resolves a page location and builds the iframe shell for it.
///
/// This is the whole "on page load" step: read the location, resolve it and
/// hand the URL to the iframe's `src`.
#[derive(Debug, Clone)]
pub struct EmbedService {
    resolver: RouteResolver,
    title: String,
}

impl EmbedService {
    /// Creates a new embed service.
    pub fn new(resolver: RouteResolver, title: impl Into<String>) -> Self {
        Self {
            resolver,
            title: title.into(),
        }
    }

    pub fn resolver(&self) -> &RouteResolver {
        &self.resolver
    }

    /// Returns the URL the iframe should load for `location`.
    pub fn frame_src(&self, location: &Location) -> String {
        self.resolver.resolve(location)
    }

    /// Builds the page template for `location` without rendering it.
    pub fn page(&self, location: &Location) -> EmbedTemplate {
        EmbedTemplate::new(self.title.clone(), self.frame_src(location))
    }

    /// Renders the full embedding page for `location`.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::Render`] if template rendering fails.
    pub fn render(&self, location: &Location) -> Result<String, EmbedError> {
        let page = self.page(location);
        tracing::debug!(path = %location.path, src = %page.src, "Rendering embed page");
        Ok(page.render()?)
    }
}

impl Default for EmbedService {
    fn default() -> Self {
        Self::new(RouteResolver::default(), DEFAULT_PAGE_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::EMBED_FRAME_ID;

    #[test]
    fn test_frame_src_matches_resolver() {
        let service = EmbedService::default();
        let location = Location::parse("/html/all?page=optimism");

        assert_eq!(
            service.frame_src(&location),
            service.resolver().resolve(&location)
        );
    }

    #[test]
    fn test_page_carries_title_and_src() {
        let service = EmbedService::new(RouteResolver::default(), "Stats");
        let page = service.page(&Location::parse("/"));

        assert_eq!(page.title, "Stats");
        assert_eq!(page.frame_id, EMBED_FRAME_ID);
        assert_eq!(page.src, "https://synthetix.streamlit.app/?embedded=true");
    }

    #[test]
    fn test_render_for_unknown_path() {
        let html = EmbedService::default()
            .render(&Location::parse("/key_metrics"))
            .unwrap();

        assert!(html.contains("synthetix.streamlit.app"));
        assert!(html.contains("key_metrics?embedded=true"));
    }
}
