//! Views are the page-level units a route points at.
//!
//! The router treats them as opaque: it only needs a name to report and a
//! title to show. Rendering belongs to the host.

use crate::error::ConfigurationError;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A renderable page-level unit
pub trait View: Send + Sync {
    /// Identifier of the view, as used in route configuration files
    fn name(&self) -> &str;

    /// Human-readable title
    fn title(&self) -> &str {
        self.name()
    }
}

/// Shared reference to a view
pub type ViewRef = Arc<dyn View>;

/// A view with a fixed name and title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticView {
    name: String,
    title: String,
}

impl StaticView {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }

    /// Wrap into a shareable view reference
    pub fn into_ref(self) -> ViewRef {
        Arc::new(self)
    }
}

impl View for StaticView {
    fn name(&self) -> &str {
        &self.name
    }

    fn title(&self) -> &str {
        &self.title
    }
}

/// Factory that constructs a view on demand
pub type ViewFactory = Box<dyn Fn() -> ViewRef + Send + Sync>;

/// Registry of constructible views, keyed by name
#[derive(Default)]
pub struct ViewRegistry {
    factories: HashMap<String, ViewFactory>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view factory under a name
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> ViewRef + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    /// Construct the view registered under `name`
    pub fn get(&self, name: &str) -> Option<ViewRef> {
        self.factories.get(name).map(|factory| factory())
    }

    /// Construct the view a route refers to, or fail with a configuration error
    pub fn resolve(&self, route: &str, view: &str) -> Result<ViewRef, ConfigurationError> {
        self.get(view).ok_or_else(|| ConfigurationError::UnknownView {
            route: route.to_string(),
            view: view.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered view names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ViewRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewRegistry")
            .field("views", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_constructs_views() {
        let registry = ViewRegistry::new()
            .register("Home", || StaticView::new("Home", "Welcome").into_ref());

        let view = registry.get("Home").expect("Home is registered");
        assert_eq!(view.name(), "Home");
        assert_eq!(view.title(), "Welcome");
        assert!(registry.contains("Home"));
        assert_eq!(registry.names(), vec!["Home"]);
    }

    #[test]
    fn test_resolve_unknown_view() {
        let registry = ViewRegistry::new();
        let err = registry.resolve("Menu", "MenuView").err().unwrap();

        assert_eq!(
            err,
            ConfigurationError::UnknownView {
                route: "Menu".to_string(),
                view: "MenuView".to_string(),
            }
        );
        assert_eq!(err.to_string(), "Unknown view 'MenuView' for route 'Menu'");
    }
}
