//! Static path-to-app routing table.

use crate::error::EmbedError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Main stats app. Served at `/` and used as the fallback for unknown paths.
pub const ROOT_APP_URL: &str = "https://synthetix.streamlit.app";

/// Cross-chain "all metrics" app, served at `/all`.
pub const ALL_APP_URL: &str = "https://synthetix-all.streamlit.app";

/// Destination a path maps to.
///
/// Route files accept both shapes:
///
/// ```json
/// {
///   "/": "https://synthetix.streamlit.app",
///   "/all": { "url": "https://synthetix-all.streamlit.app" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RouteTarget {
    /// Bare app URL.
    Url(String),
    /// App record with a `url` field.
    App { url: String },
}

impl RouteTarget {
    /// Returns the app root URL regardless of the target shape.
    pub fn root(&self) -> &str {
        match self {
            RouteTarget::Url(url) => url,
            RouteTarget::App { url } => url,
        }
    }
}

/// Exact-match mapping from a page path to its [`RouteTarget`].
///
/// Keys always start with `/`. The table is built once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteTarget>,
}

impl RouteTable {
    /// Builds a table from `(path, target)` pairs and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`EmbedError::InvalidRouteTable`] if a key does not start with `/`
    /// or a target URL is empty.
    pub fn new<I, K>(routes: I) -> Result<Self, EmbedError>
    where
        I: IntoIterator<Item = (K, RouteTarget)>,
        K: Into<String>,
    {
        let table = Self {
            routes: routes.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Loads a table from a JSON routes file.
    ///
    /// # Errors
    ///
    /// - [`EmbedError::RoutesFileRead`] if the file cannot be read
    /// - [`EmbedError::RoutesFileParse`] if the content is not a valid table
    /// - [`EmbedError::InvalidRouteTable`] if validation fails
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| EmbedError::RoutesFileRead {
            path: path.to_path_buf(),
            source,
        })?;

        let table: Self =
            serde_json::from_str(&content).map_err(|source| EmbedError::RoutesFileParse {
                path: path.to_path_buf(),
                source,
            })?;

        table.validate()?;
        tracing::debug!(path = %path.display(), routes = table.len(), "Loaded routes file");
        Ok(table)
    }

    fn validate(&self) -> Result<(), EmbedError> {
        for (path, target) in &self.routes {
            if !path.starts_with('/') {
                return Err(EmbedError::invalid_route_table(format!(
                    "path '{path}' must start with '/'"
                )));
            }
            if target.root().trim().is_empty() {
                return Err(EmbedError::invalid_route_table(format!(
                    "route '{path}' has an empty URL"
                )));
            }
        }
        Ok(())
    }

    /// Looks up the exact path. No prefix matching or trailing-slash folding.
    pub fn lookup(&self, path: &str) -> Option<&RouteTarget> {
        self.routes.get(path)
    }

    /// Iterates routes in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteTarget)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Default for RouteTable {
    /// Production table: the main app at `/` and the all-metrics app at `/all`.
    fn default() -> Self {
        let mut routes = BTreeMap::new();
        routes.insert("/".to_string(), RouteTarget::Url(ROOT_APP_URL.to_string()));
        routes.insert(
            "/all".to_string(),
            RouteTarget::App {
                url: ALL_APP_URL.to_string(),
            },
        );
        Self { routes }
    }
}
