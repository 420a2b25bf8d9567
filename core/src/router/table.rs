//! Route table: the ordered, validated list of routes and path matching

use super::location::Location;
use super::pattern::PathPattern;
use super::route::{Resolution, ResolvedRoute, RouteDescriptor, RouteName};
use crate::error::{ConfigurationError, NavigationError};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Maximum number of redirects followed while resolving one location
pub const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
struct TableEntry {
    descriptor: RouteDescriptor,
    pattern: PathPattern,
}

/// Immutable, validated route table.
///
/// Lookup is an exact match on the normalized path first; dynamic patterns
/// are then tried in insertion order and the first match wins.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<TableEntry>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<RouteName, usize>,
}

impl RouteTable {
    /// Build and validate a table from descriptors, keeping their order
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, ConfigurationError> {
        if routes.is_empty() {
            return Err(ConfigurationError::EmptyTable);
        }

        let mut entries: Vec<TableEntry> = Vec::with_capacity(routes.len());
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();
        let mut by_shape: HashMap<String, usize> = HashMap::new();

        for (index, descriptor) in routes.into_iter().enumerate() {
            if descriptor.path.trim().is_empty() {
                return Err(ConfigurationError::EmptyField { index, field: "path" });
            }
            if descriptor.name.as_str().trim().is_empty() {
                return Err(ConfigurationError::EmptyField { index, field: "name" });
            }
            if descriptor.view.is_none() && descriptor.redirect.is_none() {
                return Err(ConfigurationError::EmptyField { index, field: "view" });
            }

            let pattern = PathPattern::parse(&descriptor.path)?;

            if let Some(&existing) = by_shape.get(&pattern.shape()) {
                return Err(ConfigurationError::DuplicatePath {
                    path: pattern.to_string(),
                    existing: entries[existing].descriptor.name.to_string(),
                });
            }
            if by_name.contains_key(&descriptor.name) {
                return Err(ConfigurationError::DuplicateName {
                    name: descriptor.name.to_string(),
                });
            }

            by_shape.insert(pattern.shape(), index);
            by_name.insert(descriptor.name.clone(), index);
            if pattern.is_static() {
                by_path.insert(pattern.as_str().to_string(), index);
            }

            entries.push(TableEntry {
                descriptor,
                pattern,
            });
        }

        let table = Self {
            entries,
            by_path,
            by_name,
        };
        table.validate_redirects()?;

        debug!("Route table built with {} routes", table.len());
        Ok(table)
    }

    /// Every redirect must reach an existing route without looping
    fn validate_redirects(&self) -> Result<(), ConfigurationError> {
        for (start, entry) in self.entries.iter().enumerate() {
            if entry.descriptor.redirect.is_none() {
                continue;
            }

            let mut visited = HashSet::from([start]);
            let mut current = start;

            while let Some(target) = &self.entries[current].descriptor.redirect {
                let next = self.redirect_target(current, target)?;
                if !visited.insert(next) {
                    return Err(ConfigurationError::InvalidRedirect {
                        route: entry.descriptor.name.to_string(),
                        reason: "redirect cycle".to_string(),
                    });
                }
                current = next;
            }
        }
        Ok(())
    }

    fn redirect_target(&self, source: usize, target: &str) -> Result<usize, ConfigurationError> {
        let source = &self.entries[source];
        let invalid = |reason: String| ConfigurationError::InvalidRedirect {
            route: source.descriptor.name.to_string(),
            reason,
        };

        if target.starts_with('/') {
            let location = Location::parse(target)
                .map_err(|_| invalid(format!("'{}' is not a valid location", target)))?;
            // `:name` in a path target is filled from the source route's params
            if let Some(name) = location
                .segments()
                .into_iter()
                .filter_map(|segment| segment.strip_prefix(':'))
                .find(|name| !source.pattern.param_names().any(|declared| declared == *name))
            {
                return Err(invalid(format!(
                    "'{}' uses ':{}', which '{}' does not capture",
                    target, name, source.pattern
                )));
            }
            self.match_location(&location)
                .map(|(index, _)| index)
                .ok_or_else(|| invalid(format!("no route matches '{}'", target)))
        } else {
            let index = *self
                .by_name
                .get(target)
                .ok_or_else(|| invalid(format!("no route named '{}'", target)))?;
            if !self.entries[index].pattern.is_static() {
                return Err(invalid(format!(
                    "route '{}' needs params and cannot be a redirect target by name",
                    target
                )));
            }
            Ok(index)
        }
    }

    fn match_location(&self, location: &Location) -> Option<(usize, BTreeMap<String, String>)> {
        if let Some(&index) = self.by_path.get(location.path()) {
            return Some((index, BTreeMap::new()));
        }

        let segments = location.segments();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.pattern.is_static())
            .find_map(|(index, entry)| entry.pattern.matches(&segments).map(|p| (index, p)))
    }

    /// Location a redirect leads to; query and fragment carry over unless
    /// the target names its own query
    fn redirect_location(
        &self,
        target: &str,
        from: &Location,
        params: &BTreeMap<String, String>,
    ) -> Option<Location> {
        let location = if target.starts_with('/') {
            let location = Location::parse(target).ok()?;
            if location.segments().iter().any(|segment| segment.starts_with(':')) {
                let pattern = PathPattern::parse(location.path()).ok()?;
                let filled: BTreeMap<String, String> = pattern
                    .param_names()
                    .filter_map(|name| params.get_key_value(name))
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect();
                let path = pattern.build(&filled).ok()?;
                location.with_path(path)
            } else {
                location
            }
        } else {
            let index = *self.by_name.get(target)?;
            Location::new(self.entries[index].pattern.as_str())
        };

        if location.query().is_empty() && location.hash().is_none() {
            let mut carried = location.with_queries(from.query().clone());
            if let Some(hash) = from.hash() {
                carried = carried.with_hash(hash);
            }
            Some(carried)
        } else {
            Some(location)
        }
    }

    /// Resolve a location to a route, following redirects
    pub fn resolve(&self, location: &Location) -> Resolution {
        let mut current = location.clone();
        let mut redirected_from = None;

        for _ in 0..=MAX_REDIRECTS {
            let Some((index, params)) = self.match_location(&current) else {
                debug!("No route matches {}", current);
                return Resolution::NotFound { location: current };
            };

            let entry = &self.entries[index];
            match &entry.descriptor.redirect {
                Some(target) => {
                    debug!("Route '{}' redirects to '{}'", entry.descriptor.name, target);
                    let Some(next) = self.redirect_location(target, &current, &params) else {
                        return Resolution::NotFound { location: current };
                    };
                    redirected_from.get_or_insert_with(|| location.clone());
                    current = next;
                }
                None => {
                    debug!("Resolved {} to route '{}'", current, entry.descriptor.name);
                    return Resolution::Matched(ResolvedRoute {
                        descriptor: entry.descriptor.clone(),
                        location: current,
                        params,
                        redirected_from,
                    });
                }
            }
        }

        Resolution::NotFound { location: current }
    }

    /// Build the location of a named route from params and query
    pub fn build_location(
        &self,
        name: &RouteName,
        params: &BTreeMap<String, String>,
        query: &BTreeMap<String, String>,
    ) -> Result<Location, NavigationError> {
        let index = *self
            .by_name
            .get(name)
            .ok_or_else(|| NavigationError::UnknownRoute {
                name: name.to_string(),
            })?;

        let path = self.entries[index]
            .pattern
            .build(params)
            .map_err(|message| NavigationError::InvalidParams {
                route: name.to_string(),
                message,
            })?;

        Ok(Location::new(path).with_queries(query.clone()))
    }

    /// Get a route by name
    pub fn get(&self, name: &str) -> Option<&RouteDescriptor> {
        self.by_name
            .get(name)
            .map(|&index| &self.entries[index].descriptor)
    }

    /// Routes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.entries.iter().map(|entry| &entry.descriptor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
