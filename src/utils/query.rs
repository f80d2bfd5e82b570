//! Query-string forwarding for the embedded app.

use url::form_urlencoded;

/// Query parameter that tells the dashboard app to hide its own chrome.
pub const EMBEDDED_PARAM: &str = "embedded";

/// Re-serializes `query` with `embedded=true` set.
///
/// Follows `URLSearchParams.set` semantics: the first existing `embedded` pair
/// takes the value `true` in place, any later `embedded` pairs are dropped,
/// and when none exists the flag is appended last. Other pairs keep their order
/// and decoded values; output uses `application/x-www-form-urlencoded`
/// encoding (spaces become `+`).
///
/// # Examples
///
/// ```
/// use stats_embed::utils::with_embedded_flag;
///
/// assert_eq!(with_embedded_flag(""), "embedded=true");
/// assert_eq!(with_embedded_flag("page=base"), "page=base&embedded=true");
/// assert_eq!(with_embedded_flag("embedded=false&a=1"), "embedded=true&a=1");
/// ```
pub fn with_embedded_flag(query: &str) -> String {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    let mut flag_written = false;

    for (name, value) in form_urlencoded::parse(query.as_bytes()) {
        if name == EMBEDDED_PARAM {
            if !flag_written {
                serializer.append_pair(EMBEDDED_PARAM, "true");
                flag_written = true;
            }
            continue;
        }
        serializer.append_pair(&name, &value);
    }

    if !flag_written {
        serializer.append_pair(EMBEDDED_PARAM, "true");
    }

    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(with_embedded_flag(""), "embedded=true");
        assert_eq!(with_embedded_flag("?"), "embedded=true");
    }

    #[test]
    fn test_appends_after_existing_params() {
        assert_eq!(
            with_embedded_flag("page=base&module=Perps"),
            "page=base&module=Perps&embedded=true"
        );
    }

    #[test]
    fn test_leading_question_mark_is_ignored() {
        assert_eq!(with_embedded_flag("?chain=all"), "chain=all&embedded=true");
    }

    #[test]
    fn test_existing_flag_is_overwritten_in_place() {
        assert_eq!(
            with_embedded_flag("a=1&embedded=false&b=2"),
            "a=1&embedded=true&b=2"
        );
    }

    #[test]
    fn test_duplicate_flags_collapse() {
        assert_eq!(
            with_embedded_flag("embedded=no&a=1&embedded=0"),
            "embedded=true&a=1"
        );
    }

    #[test]
    fn test_repeated_params_are_kept() {
        assert_eq!(
            with_embedded_flag("chain=base&chain=arbitrum"),
            "chain=base&chain=arbitrum&embedded=true"
        );
    }

    #[test]
    fn test_encoded_values_round_trip() {
        assert_eq!(
            with_embedded_flag("module=Perps%20V2"),
            "module=Perps+V2&embedded=true"
        );
        assert_eq!(
            with_embedded_flag("q=a%26b%3Dc"),
            "q=a%26b%3Dc&embedded=true"
        );
    }

    #[test]
    fn test_key_without_value() {
        assert_eq!(with_embedded_flag("debug"), "debug=&embedded=true");
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        assert_eq!(with_embedded_flag("a=1&&b=2&"), "a=1&b=2&embedded=true");
    }
}
