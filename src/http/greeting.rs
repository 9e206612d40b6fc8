//! The greeting route handler.

use axum::extract::RawQuery;

/// `GET /greeting`: respond with `Hello <name>`, status 200.
///
/// Total over all query states. A missing query string, a missing or
/// empty `name` key, and a query the decoder cannot handle all fall
/// back to the empty name rather than rejecting the request. Values are
/// percent-decoded by the query layer and used verbatim.
pub async fn greeting(RawQuery(query): RawQuery) -> String {
    greet(&extract_name(query.as_deref()))
}

/// Pull the `name` value out of a raw query string.
///
/// Decodes the query as key/value pairs and takes the first `name`,
/// so duplicate keys resolve first-wins instead of all-or-nothing.
fn extract_name(query: Option<&str>) -> String {
    query
        .and_then(|q| serde_urlencoded::from_str::<Vec<(String, String)>>(q).ok())
        .and_then(|pairs| pairs.into_iter().find(|(key, _)| key == "name"))
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Format the greeting body: the literal `Hello `, then the name.
fn greet(name: &str) -> String {
    format!("Hello {name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greet_concatenates_after_one_space() {
        assert_eq!(greet("World"), "Hello World");
        assert_eq!(greet(""), "Hello ");
    }

    #[test]
    fn name_is_percent_decoded() {
        assert_eq!(extract_name(Some("name=Jane%20Doe")), "Jane Doe");
    }

    #[test]
    fn empty_value_and_missing_key_are_equivalent() {
        assert_eq!(extract_name(Some("name=")), "");
        assert_eq!(extract_name(Some("")), "");
        assert_eq!(extract_name(None), "");
    }

    #[test]
    fn duplicate_keys_take_the_first_value() {
        assert_eq!(extract_name(Some("name=a&name=b")), "a");
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert_eq!(extract_name(Some("lang=en&name=Ada")), "Ada");
    }
}
