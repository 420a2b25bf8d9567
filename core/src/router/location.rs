//! Locations: the path, query and fragment of an in-app URL

use super::pattern::{normalize_path, split_segments};
use crate::error::NavigationError;
use std::collections::BTreeMap;
use std::fmt;
use url::{form_urlencoded, Url};

/// Origin used to parse relative URLs; it never leaves this module.
const PARSE_ORIGIN: &str = "http://tablebook.local";

/// A location inside the application
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    path: String,
    query: BTreeMap<String, String>,
    hash: Option<String>,
}

impl Location {
    /// The application root, `/`
    pub fn root() -> Self {
        Self::new("/")
    }

    /// Create a location for a path with no query or fragment
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            query: BTreeMap::new(),
            hash: None,
        }
    }

    /// Parse a relative URL such as `/reservation?date=2024-05-01#top`.
    ///
    /// Only absolute paths are accepted; anything else (including
    /// scheme-relative `//host` or `/\host` links) is not an in-app location.
    pub fn parse(input: &str) -> Result<Self, NavigationError> {
        let invalid = || NavigationError::InvalidLocation {
            location: input.to_string(),
        };

        if !input.starts_with('/') || input.starts_with("//") {
            return Err(invalid());
        }

        let origin = Url::parse(PARSE_ORIGIN).map_err(|_| invalid())?;
        let url = origin.join(input).map_err(|_| invalid())?;

        // `/\host` is scheme-relative to a URL parser
        if url.host_str() != origin.host_str() {
            return Err(invalid());
        }

        Ok(Self {
            path: normalize_path(url.path()),
            query: url
                .query_pairs()
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect(),
            hash: url
                .fragment()
                .filter(|fragment| !fragment.is_empty())
                .map(str::to_string),
        })
    }

    /// Add a query parameter
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Merge query parameters, overriding existing keys
    pub fn with_queries(mut self, query: BTreeMap<String, String>) -> Self {
        self.query.extend(query);
        self
    }

    /// Set the fragment
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        let hash = hash.into();
        self.hash = (!hash.is_empty()).then_some(hash);
        self
    }

    /// Replace the path, keeping query and fragment
    pub fn with_path(mut self, path: impl AsRef<str>) -> Self {
        self.path = normalize_path(path.as_ref());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Path segments, empty for the root
    pub fn segments(&self) -> Vec<&str> {
        split_segments(&self.path)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{}", query)?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{}", hash)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path_query_and_hash() {
        let location = Location::parse("/reservation/?date=2024-05-01&party=4#summary").unwrap();

        assert_eq!(location.path(), "/reservation");
        assert_eq!(
            location.query().get("date").map(String::as_str),
            Some("2024-05-01")
        );
        assert_eq!(location.query().get("party").map(String::as_str), Some("4"));
        assert_eq!(location.hash(), Some("summary"));
        assert_eq!(
            location.to_string(),
            "/reservation?date=2024-05-01&party=4#summary"
        );
    }

    #[test]
    fn test_parse_rejects_non_app_locations() {
        for bad in [
            "reservation",
            "",
            "//evil.example/x",
            "/\\evil.example/x",
            "https://example.com/",
        ] {
            assert!(
                matches!(
                    Location::parse(bad),
                    Err(NavigationError::InvalidLocation { .. })
                ),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_root_and_segments() {
        let root = Location::parse("/").unwrap();
        assert_eq!(root, Location::root());
        assert!(root.segments().is_empty());

        let nested = Location::new("/reservation/42");
        assert_eq!(nested.segments(), vec!["reservation", "42"]);
    }

    #[test]
    fn test_query_encoding_in_display() {
        let location = Location::new("/reservation").with_query("name", "Ada Lovelace");
        assert_eq!(location.to_string(), "/reservation?name=Ada+Lovelace");

        let reparsed = Location::parse(&location.to_string()).unwrap();
        assert_eq!(reparsed, location);
    }
}
