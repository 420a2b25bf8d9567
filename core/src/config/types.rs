//! Router configuration types
//!
//! Core only accepts fully resolved configuration. Discovery, loading and
//! overrides happen in the CLI layer.

use crate::error::{ConfigurationError, Result};
use crate::router::history::{create_history, DEFAULT_MAX_ENTRIES};
use crate::router::{History, Navigator, RouteDescriptor, RouteTable};
use crate::view::ViewRegistry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// URL-synchronization strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// Clean URLs through the history API
    #[default]
    Web,
    /// Fragment URLs (`/#/path`)
    Hash,
    /// No URL synchronization
    Memory,
}

impl HistoryMode {
    /// Get the mode name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryMode::Web => "web",
            HistoryMode::Hash => "hash",
            HistoryMode::Memory => "memory",
        }
    }
}

impl fmt::Display for HistoryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "web" | "html5" => Ok(HistoryMode::Web),
            "hash" => Ok(HistoryMode::Hash),
            "memory" => Ok(HistoryMode::Memory),
            other => Err(format!(
                "unknown history mode '{}' (expected web, hash or memory)",
                other
            )),
        }
    }
}

/// One route as written in a configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// URL path pattern
    pub path: String,
    /// Symbolic route name
    pub name: String,
    /// Name of the view in the view registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
    /// Redirect target: a path or a route name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Additional metadata for the route
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub meta: HashMap<String, String>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: Some(view.into()),
            redirect: None,
            meta: HashMap::new(),
        }
    }

    pub fn redirect(
        path: impl Into<String>,
        name: impl Into<String>,
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

    /// Turn into a descriptor, constructing the view from the registry
    pub fn to_descriptor(&self, views: &ViewRegistry) -> Result<RouteDescriptor> {
        let view = self
            .view
            .as_deref()
            .map(|view| views.resolve(&self.name, view))
            .transpose()?;

        Ok(RouteDescriptor {
            path: self.path.clone(),
            name: self.name.clone().into(),
            view,
            redirect: self.redirect.clone(),
            meta: self.meta.clone(),
        })
    }
}

fn default_base() -> String {
    "/".to_string()
}

fn default_max_history() -> usize {
    DEFAULT_MAX_ENTRIES
}

/// Complete router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// History strategy
    #[serde(default)]
    pub history: HistoryMode,
    /// Base path the application is served under
    #[serde(default = "default_base")]
    pub base: String,
    /// Maximum number of history entries
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Routes, in match order
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

impl RouterConfig {
    /// Create an empty configuration with clean-URL history at the root
    pub fn new() -> Self {
        Self {
            history: HistoryMode::Web,
            base: default_base(),
            max_history: default_max_history(),
            routes: Vec::new(),
        }
    }

    /// Add a route
    pub fn add_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    pub fn with_history(mut self, history: HistoryMode) -> Self {
        self.history = history;
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Build the validated route table
    pub fn build_table(&self, views: &ViewRegistry) -> Result<RouteTable> {
        let descriptors = self
            .routes
            .iter()
            .map(|route| route.to_descriptor(views))
            .collect::<Result<Vec<_>>>()?;
        Ok(RouteTable::new(descriptors)?)
    }

    /// Build the history backend
    pub fn build_history(&self) -> Result<Box<dyn History>> {
        if self.max_history == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "max_history",
                value: self.max_history.to_string(),
            }
            .into());
        }
        Ok(create_history(self.history, &self.base, self.max_history)?)
    }

    /// Build a navigator from this configuration
    pub fn build_navigator(&self, views: &ViewRegistry) -> Result<Navigator> {
        let table = self.build_table(views)?;
        let history = self.build_history()?;
        Ok(Navigator::new(table, history))
    }

    /// Validate without keeping the result
    pub fn validate(&self, views: &ViewRegistry) -> Result<()> {
        self.build_table(views)?;
        self.build_history()?;
        Ok(())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::view::StaticView;

    fn views() -> ViewRegistry {
        ViewRegistry::new()
            .register("Home", || StaticView::new("Home", "Home").into_ref())
            .register("Reservation", || {
                StaticView::new("Reservation", "Reservation").into_ref()
            })
    }

    #[test]
    fn test_history_mode_parsing() {
        assert_eq!("web".parse::<HistoryMode>().unwrap(), HistoryMode::Web);
        assert_eq!("HASH".parse::<HistoryMode>().unwrap(), HistoryMode::Hash);
        assert_eq!("memory".parse::<HistoryMode>().unwrap(), HistoryMode::Memory);
        assert!("fragment".parse::<HistoryMode>().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: RouterConfig = serde_json::from_str(
            r#"{
                "routes": [
                    { "path": "/", "name": "Home", "view": "Home" },
                    { "path": "/book", "name": "Book", "redirect": "Home", "meta": { "hidden": "true" } }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(config.history, HistoryMode::Web);
        assert_eq!(config.base, "/");
        assert_eq!(config.max_history, DEFAULT_MAX_ENTRIES);
        assert_eq!(config.routes[1], {
            let mut route = RouteConfig::redirect("/book", "Book", "Home");
            route.meta.insert("hidden".to_string(), "true".to_string());
            route
        });
    }

    #[test]
    fn test_history_mode_serialization() {
        let config = RouterConfig::new().with_history(HistoryMode::Hash);
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["history"], "hash");
    }

    #[test]
    fn test_build_navigator() {
        let config = RouterConfig::new()
            .with_history(HistoryMode::Memory)
            .add_route(RouteConfig::new("/", "Home", "Home"))
            .add_route(RouteConfig::new("/reservation", "Reservation", "Reservation"));

        let navigator = config.build_navigator(&views()).unwrap();
        assert_eq!(navigator.routes().len(), 2);
        assert_eq!(navigator.history().mode(), HistoryMode::Memory);
        assert!(config.validate(&views()).is_ok());
    }

    #[test]
    fn test_unknown_view_is_configuration_error() {
        let config = RouterConfig::new().add_route(RouteConfig::new("/", "Home", "Landing"));

        match config.build_table(&views()) {
            Err(Error::Config(ConfigurationError::UnknownView { route, view })) => {
                assert_eq!(route, "Home");
                assert_eq!(view, "Landing");
            }
            other => panic!("expected unknown view error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn test_invalid_base_rejected() {
        let config = RouterConfig::new()
            .with_base("/app?x")
            .add_route(RouteConfig::new("/", "Home", "Home"));

        assert!(matches!(
            config.build_history(),
            Err(Error::Config(ConfigurationError::InvalidBase { .. }))
        ));
    }
}
