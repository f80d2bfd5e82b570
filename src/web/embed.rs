//! Iframe shell page.

use askama::Template;

/// DOM id of the iframe that receives the resolved URL.
pub const EMBED_FRAME_ID: &str = "embeddedFrame";

/// Template for the embedding page.
///
/// Renders `templates/embed.html`: a borderless iframe filling the viewport,
/// with `src` set to the resolved app URL.
#[derive(Debug, Clone, Template)]
#[template(path = "embed.html")]
pub struct EmbedTemplate {
    pub title: String,
    pub frame_id: &'static str,
    pub src: String,
}

impl EmbedTemplate {
    pub fn new(title: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            frame_id: EMBED_FRAME_ID,
            src: src.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_frame() {
        let html = EmbedTemplate::new(
            "Synthetix Stats",
            "https://synthetix.streamlit.app/?embedded=true",
        )
        .render()
        .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"id="embeddedFrame""#));
        assert!(html.contains("<title>Synthetix Stats</title>"));
        assert!(html.contains("synthetix.streamlit.app"));
        assert!(html.contains("embedded=true"));
    }

    #[test]
    fn test_render_escapes_title() {
        let html = EmbedTemplate::new("<script>x</script>", "https://a.example/?embedded=true")
            .render()
            .unwrap();

        assert!(!html.contains("<script>x</script>"));
        assert!(html.contains("&#60;script&#62;"));
    }

    #[test]
    fn test_render_escapes_ampersand_in_src() {
        let html = EmbedTemplate::new("t", "https://a.example/?page=base&embedded=true")
            .render()
            .unwrap();

        assert!(html.contains("page=base&#38;embedded=true"));
    }
}
