//! Route resolution from page location to embedded app URL.

use crate::domain::route::ROOT_APP_URL;
use crate::domain::{Location, RouteTable};
use crate::utils::with_embedded_flag;

/// Path prefix the embedding page is hosted under on the static host.
pub const DEFAULT_MOUNT_PREFIX: &str = "/html";

/// Resolves page locations against a [`RouteTable`].
///
/// Resolution has no error path: a path that is not in the table is passed
/// through to the default base URL.
#[derive(Debug, Clone)]
pub struct RouteResolver {
    routes: RouteTable,
    default_base: String,
    mount_prefix: String,
}

impl RouteResolver {
    /// Creates a resolver.
    ///
    /// # Arguments
    ///
    /// - `routes` - Exact-match route table
    /// - `default_base` - App URL unknown paths are appended to, without trailing slash
    /// - `mount_prefix` - Leading path segment stripped before lookup; empty disables it
    pub fn new(
        routes: RouteTable,
        default_base: impl Into<String>,
        mount_prefix: impl Into<String>,
    ) -> Self {
        Self {
            routes,
            default_base: default_base.into(),
            mount_prefix: mount_prefix.into(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn default_base(&self) -> &str {
        &self.default_base
    }

    pub fn mount_prefix(&self) -> &str {
        &self.mount_prefix
    }

    /// Produces the iframe URL for `location`.
    ///
    /// # Resolution
    ///
    /// 1. Strip the mount prefix from the path
    /// 2. Forward the query with `embedded=true` set
    /// 3. Known path: `{route root}/?{query}`
    /// 4. Unknown path: `{default base}{path}?{query}`
    ///
    /// # Examples
    ///
    /// ```
    /// use stats_embed::application::services::RouteResolver;
    /// use stats_embed::domain::Location;
    ///
    /// let resolver = RouteResolver::default();
    /// assert_eq!(
    ///     resolver.resolve(&Location::parse("/html/all?page=base")),
    ///     "https://synthetix-all.streamlit.app/?page=base&embedded=true"
    /// );
    /// ```
    pub fn resolve(&self, location: &Location) -> String {
        let path = self.strip_mount_prefix(&location.path);
        let query = with_embedded_flag(&location.query);

        match self.routes.lookup(path) {
            Some(target) => {
                tracing::debug!(path, target = target.root(), "Matched route");
                format!("{}/?{}", target.root(), query)
            }
            None => {
                tracing::debug!(path, base = %self.default_base, "No route, passing path through");
                format!("{}{}?{}", self.default_base, path, query)
            }
        }
    }

    /// Removes the mount prefix when it is a whole leading segment.
    ///
    /// `/html/all` becomes `/all` and `/html` becomes an empty path, while
    /// `/htmlx` is left untouched.
    fn strip_mount_prefix<'a>(&self, path: &'a str) -> &'a str {
        if self.mount_prefix.is_empty() {
            return path;
        }

        match path.strip_prefix(self.mount_prefix.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

impl Default for RouteResolver {
    /// Production routing: built-in table, main app fallback, `/html` mount.
    fn default() -> Self {
        Self::new(RouteTable::default(), ROOT_APP_URL, DEFAULT_MOUNT_PREFIX)
    }
}
