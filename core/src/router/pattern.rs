//! Path patterns
//!
//! A pattern is a URL path made of static segments (`reservation`) and
//! dynamic segments (`:id`). The root path `/` has no segments.

use crate::error::ConfigurationError;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Characters escaped when a param value is written into a path segment;
/// the same set a URL parser escapes in paths, plus `/` and `%`.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// RFC 3986 `pchar` minus `:`, which only introduces a dynamic segment.
fn static_segment_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9\-._~!$&'()*+,;=@]|%[0-9A-Fa-f]{2})+$")
            .expect("static segment regex is valid")
    })
}

fn param_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("param regex is valid"))
}

/// Normalize a concrete or pattern path.
///
/// Ensures a leading slash and drops a trailing slash, so `/reservation/`
/// and `/reservation` are the same path. An empty input is the root.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Split a normalized path into its segments. The root has none.
pub fn split_segments(path: &str) -> Vec<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    }
}

/// One segment of a path pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Matches the literal text
    Static(String),
    /// Captures any non-empty segment under the given name
    Param(String),
}

/// A parsed, validated path pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse and validate a path pattern
    pub fn parse(path: &str) -> Result<Self, ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if !path.starts_with('/') {
            return Err(invalid("path must start with '/'"));
        }
        if path.contains(['?', '#']) {
            return Err(invalid("path must not contain a query or fragment"));
        }

        let raw = normalize_path(path);
        let mut segments = Vec::new();

        for segment in split_segments(&raw) {
            if segment.is_empty() {
                return Err(invalid("empty path segment"));
            }

            if let Some(name) = segment.strip_prefix(':') {
                if !param_name_re().is_match(name) {
                    return Err(invalid(&format!("invalid parameter name ':{}'", name)));
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                {
                    return Err(invalid(&format!("parameter ':{}' declared twice", name)));
                }
                segments.push(Segment::Param(name.to_string()));
            } else if static_segment_re().is_match(segment) {
                segments.push(Segment::Static(segment.to_string()));
            } else {
                return Err(invalid(&format!("invalid characters in segment '{}'", segment)));
            }
        }

        Ok(Self { raw, segments })
    }

    /// The normalized pattern text
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Whether the pattern has no dynamic segments
    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    /// Names of the dynamic segments, in path order
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Pattern text with parameter names erased.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(text) => format!("/{}", text),
                Segment::Param(_) => "/:".to_string(),
            })
            .collect()
    }

    /// Match concrete path segments, returning the captured params.
    ///
    /// Segments are in their encoded form; captured values are decoded.
    pub fn matches(&self, segments: &[&str]) -> Option<BTreeMap<String, String>> {
        if segments.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (pattern, actual) in self.segments.iter().zip(segments) {
            match pattern {
                Segment::Static(text) if text == actual => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if actual.is_empty() => return None,
                Segment::Param(name) => {
                    let value = percent_decode_str(actual).decode_utf8_lossy();
                    params.insert(name.clone(), value.into_owned());
                }
            }
        }
        Some(params)
    }

    /// Fill the dynamic segments to produce a concrete, encoded path.
    ///
    /// Every declared parameter must be supplied and no others.
    pub fn build(&self, params: &BTreeMap<String, String>) -> Result<String, String> {
        if let Some(unknown) = params
            .keys()
            .find(|key| !self.param_names().any(|name| name == key.as_str()))
        {
            return Err(format!("unexpected param '{}'", unknown));
        }

        if self.segments.is_empty() {
            return Ok("/".to_string());
        }

        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(name) => match params.get(name) {
                    Some(value) if value.is_empty() => {
                        return Err(format!("empty value for param '{}'", name))
                    }
                    Some(value) => path.extend(utf8_percent_encode(value, SEGMENT)),
                    None => return Err(format!("missing param '{}'", name)),
                },
            }
        }
        Ok(path)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
