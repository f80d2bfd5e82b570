//! Error types for route table loading and page rendering.
//!
//! Route resolution itself never fails; unknown paths fall through to the
//! default app. Errors only come from the layers around it.

use std::path::PathBuf;

/// Errors produced while loading configuration or rendering the embed page.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("Failed to read routes file {}: {source}", .path.display())]
    RoutesFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse routes file {}: {source}", .path.display())]
    RoutesFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid route table: {0}")]
    InvalidRouteTable(String),

    #[error("Invalid default base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to render embed page: {0}")]
    Render(#[from] askama::Error),
}

impl EmbedError {
    pub fn invalid_route_table(message: impl Into<String>) -> Self {
        Self::InvalidRouteTable(message.into())
    }

    pub fn invalid_base_url(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            url: url.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_route_table_message() {
        let err = EmbedError::invalid_route_table("key 'all' must start with '/'");
        assert_eq!(
            err.to_string(),
            "Invalid route table: key 'all' must start with '/'"
        );
    }

    #[test]
    fn test_invalid_base_url_message() {
        let err = EmbedError::invalid_base_url("ftp://x", "only http and https are allowed");
        assert_eq!(
            err.to_string(),
            "Invalid default base URL 'ftp://x': only http and https are allowed"
        );
    }

    #[test]
    fn test_routes_file_read_keeps_source() {
        let err = EmbedError::RoutesFileRead {
            path: PathBuf::from("/missing/routes.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("/missing/routes.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
