//! Route definitions
//!
//! A route pairs a URL path pattern with a symbolic name and the view it
//! displays.

use super::location::Location;
use crate::view::ViewRef;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Symbolic, unique name of a route
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteName(pub String);

impl RouteName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for RouteName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RouteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RouteName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Route definition: path pattern, name, view and metadata
#[derive(Clone)]
pub struct RouteDescriptor {
    /// URL path pattern, unique across the table
    pub path: String,
    /// Symbolic name, unique across the table
    pub name: RouteName,
    /// View displayed for this route; redirect routes may omit it
    pub view: Option<ViewRef>,
    /// Path (starting with `/`) or route name this route redirects to
    pub redirect: Option<String>,
    /// Free-form metadata
    pub meta: HashMap<String, String>,
}

impl RouteDescriptor {
    /// Create a route displaying `view`
    pub fn new(path: impl Into<String>, name: impl Into<RouteName>, view: ViewRef) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: Some(view),
            redirect: None,
            meta: HashMap::new(),
        }
    }

    /// Create a route that forwards to another path or route name
    pub fn redirect(
        path: impl Into<String>,
        name: impl Into<RouteName>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: None,
            redirect: Some(target.into()),
            meta: HashMap::new(),
        }
    }

    /// Add metadata to this route
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Name of the view, if any
    pub fn view_name(&self) -> Option<&str> {
        self.view.as_ref().map(|view| view.name())
    }
}

impl fmt::Debug for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDescriptor")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("view", &self.view_name())
            .field("redirect", &self.redirect)
            .field("meta", &self.meta)
            .finish()
    }
}

/// A successful resolution of a location against the route table
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    /// The matched route, after following redirects
    pub descriptor: RouteDescriptor,
    /// The concrete location, after following redirects
    pub location: Location,
    /// Values captured by dynamic segments
    pub params: BTreeMap<String, String>,
    /// Location originally requested, when a redirect was followed
    pub redirected_from: Option<Location>,
}

impl ResolvedRoute {
    pub fn name(&self) -> &RouteName {
        &self.descriptor.name
    }

    /// The matched route's path pattern
    pub fn pattern(&self) -> &str {
        &self.descriptor.path
    }

    /// The concrete path
    pub fn path(&self) -> &str {
        self.location.path()
    }

    pub fn view(&self) -> Option<&ViewRef> {
        self.descriptor.view.as_ref()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

/// Outcome of resolving a location: matched, or not found.
///
/// Not found is an ordinary result the UI is expected to render a fallback
/// for, not an error.
#[derive(Debug, Clone)]
pub enum Resolution {
    Matched(ResolvedRoute),
    NotFound { location: Location },
}

impl Resolution {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn into_route(self) -> Option<ResolvedRoute> {
        match self {
            Resolution::Matched(route) => Some(route),
            Resolution::NotFound { .. } => None,
        }
    }

    /// The location that was resolved (the final one for redirects)
    pub fn location(&self) -> &Location {
        match self {
            Resolution::Matched(route) => &route.location,
            Resolution::NotFound { location } => location,
        }
    }
}
