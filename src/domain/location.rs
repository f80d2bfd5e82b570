//! The page location handed to the resolver.

/// Path and raw query string of the embedding page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub path: String,
    /// Raw query without the leading `?`. Empty when the page has none.
    pub query: String,
}

impl Location {
    /// Creates a location from a path and a raw query string.
    ///
    /// A leading `?` on the query is dropped, so both `window.location.search`
    /// style (`?a=1`) and bare (`a=1`) strings are accepted.
    pub fn new(path: impl Into<String>, query: impl AsRef<str>) -> Self {
        let query = query.as_ref();
        Self {
            path: path.into(),
            query: query.strip_prefix('?').unwrap_or(query).to_string(),
        }
    }

    /// Splits a request target such as `/html/all?page=base#top`.
    ///
    /// The fragment is discarded; everything before the first `?` is the path.
    pub fn parse(target: &str) -> Self {
        let without_fragment = target.split_once('#').map_or(target, |(head, _)| head);

        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(without_fragment, ""),
        }
    }
}
