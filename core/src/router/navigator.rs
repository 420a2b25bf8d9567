//! Navigator: the runtime object that resolves and performs navigation
//!
//! The navigator owns a history backend and a shared route table. Its
//! current route is derived from the history's current location and is only
//! changed by the navigation handlers below. Hosts forward external events
//! (back/forward buttons, clicked links) through [`Navigator::handle_pop`] and
//! [`Navigator::intercept_link`] once the navigator is installed.

use super::history::History;
use super::location::Location;
use super::route::{Resolution, ResolvedRoute, RouteDescriptor, RouteName};
use super::table::RouteTable;
use crate::config::HistoryMode;
use crate::error::{ConfigurationError, NavigationError};
use crate::view::ViewRef;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a navigation request points: a path or a route name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    kind: TargetKind,
    params: BTreeMap<String, String>,
    query: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TargetKind {
    Path(String),
    Name(RouteName),
}

impl NavigationTarget {
    /// Target a relative URL (path, optional query and fragment)
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Path(path.into()),
            params: BTreeMap::new(),
            query: BTreeMap::new(),
        }
    }

    /// Target a route by name
    pub fn named(name: impl Into<RouteName>) -> Self {
        Self {
            kind: TargetKind::Name(name.into()),
            params: BTreeMap::new(),
            query: BTreeMap::new(),
        }
    }

    /// Parse a target: text starting with `/` is a path, anything else a name
    pub fn parse(target: &str) -> Self {
        if target.starts_with('/') {
            Self::path(target)
        } else {
            Self::named(target)
        }
    }

    /// Supply a value for a dynamic segment; only valid for named targets
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }
}

impl From<&str> for NavigationTarget {
    fn from(target: &str) -> Self {
        Self::parse(target)
    }
}

impl From<String> for NavigationTarget {
    fn from(target: String) -> Self {
        Self::parse(&target)
    }
}

impl From<RouteName> for NavigationTarget {
    fn from(name: RouteName) -> Self {
        Self::named(name)
    }
}

impl From<Location> for NavigationTarget {
    fn from(location: Location) -> Self {
        Self::path(location.to_string())
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TargetKind::Path(path) => f.write_str(path),
            TargetKind::Name(name) => write!(f, "{}", name),
        }
    }
}

/// External history event, as raised by the host's back/forward controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopEvent {
    Back,
    Forward,
    Go(isize),
}

impl PopEvent {
    pub fn delta(self) -> isize {
        match self {
            PopEvent::Back => -1,
            PopEvent::Forward => 1,
            PopEvent::Go(delta) => delta,
        }
    }
}

/// How the current route changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// Initial resolution when the listener was installed
    Initial,
    /// New history entry
    Push,
    /// Current history entry overwritten
    Replace,
    /// Moved through existing history entries
    Pop,
}

/// Notification delivered to subscribers after the current route changes
#[derive(Debug, Clone)]
pub struct RouteChange {
    pub from: Resolution,
    pub to: Resolution,
    pub kind: NavigationKind,
}

/// Handle returned by [`Navigator::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&RouteChange) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Installed,
    Detached,
}

/// Navigator bound to a route table and a history backend
pub struct Navigator {
    table: Arc<RouteTable>,
    history: Box<dyn History>,
    current: Resolution,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    lifecycle: Lifecycle,
}

impl Navigator {
    /// Create a navigator; the current route is resolved from the
    /// history's current location
    pub fn new(table: impl Into<Arc<RouteTable>>, history: Box<dyn History>) -> Self {
        let table = table.into();
        let current = table.resolve(history.location());

        Self {
            table,
            history,
            current,
            listeners: Vec::new(),
            next_subscription: 0,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Start a builder
    pub fn builder() -> NavigatorBuilder {
        NavigatorBuilder::new()
    }

    /// Attach to the host's navigation events.
    ///
    /// Re-resolves the history's current location (rewriting the entry when a
    /// redirect applies) and notifies subscribers with
    /// [`NavigationKind::Initial`].
    pub fn install(&mut self) -> &Resolution {
        if self.lifecycle == Lifecycle::Installed {
            return &self.current;
        }
        self.lifecycle = Lifecycle::Installed;

        let resolution = self.table.resolve(self.history.location());
        self.sync_redirect(&resolution);
        info!(
            "Navigator installed ({} history) at {}",
            self.history.mode().as_str(),
            resolution.location()
        );
        self.commit(resolution, NavigationKind::Initial);
        &self.current
    }

    /// Detach from the host. External events are rejected afterwards and
    /// subscribers are dropped.
    pub fn teardown(&mut self) {
        if self.lifecycle != Lifecycle::Detached {
            info!("Navigator torn down");
        }
        self.lifecycle = Lifecycle::Detached;
        self.listeners.clear();
    }

    pub fn is_installed(&self) -> bool {
        self.lifecycle == Lifecycle::Installed
    }

    /// Resolve a path against the route table without navigating.
    ///
    /// Unknown or malformed paths yield [`Resolution::NotFound`].
    pub fn resolve(&self, path: &str) -> Resolution {
        match Location::parse(path) {
            Ok(location) => self.table.resolve(&location),
            Err(_) => {
                debug!("'{}' is not an in-app location", path);
                Resolution::NotFound {
                    location: Location::new(path),
                }
            }
        }
    }

    /// Navigate to a path or route name, adding a history entry
    pub fn navigate(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<ResolvedRoute, NavigationError> {
        self.transition(target.into(), NavigationKind::Push)
    }

    /// Navigate to a path or route name, overwriting the current entry
    pub fn replace(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<ResolvedRoute, NavigationError> {
        self.transition(target.into(), NavigationKind::Replace)
    }

    /// Move `delta` entries through history
    pub fn go(&mut self, delta: isize) -> Result<&Resolution, NavigationError> {
        self.ensure_attached()?;
        self.pop(delta)
    }

    pub fn back(&mut self) -> Result<&Resolution, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<&Resolution, NavigationError> {
        self.go(1)
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go(-1)
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.can_go(1)
    }

    /// Handle a back/forward event raised by the host
    pub fn handle_pop(&mut self, event: PopEvent) -> Result<&Resolution, NavigationError> {
        self.ensure_installed()?;
        debug!("External history event: {:?}", event);
        self.pop(event.delta())
    }

    /// Handle a link activation intercepted by the host.
    ///
    /// The href is read through the history strategy, so base paths and
    /// fragments are handled the same way as the address bar.
    pub fn intercept_link(&mut self, href: &str) -> Result<ResolvedRoute, NavigationError> {
        self.ensure_installed()?;
        let location = self.history.parse_href(href)?;
        debug!("Intercepted link {} -> {}", href, location);
        self.transition(NavigationTarget::from(location), NavigationKind::Push)
    }

    /// Address-bar text a target would produce
    pub fn href(&self, target: impl Into<NavigationTarget>) -> Result<String, NavigationError> {
        let location = self.target_location(&target.into())?;
        Ok(self.history.href(&location))
    }

    /// Register a listener for route changes
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&RouteChange) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Current resolution, which may be not found
    pub fn current(&self) -> &Resolution {
        &self.current
    }

    /// Current route, if the current location matched one
    pub fn current_route(&self) -> Option<&ResolvedRoute> {
        self.current.route()
    }

    /// Current location, as held by the history backend
    pub fn current_location(&self) -> &Location {
        self.history.location()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &dyn History {
        self.history.as_ref()
    }

    fn ensure_attached(&self) -> Result<(), NavigationError> {
        match self.lifecycle {
            Lifecycle::Detached => Err(NavigationError::Detached),
            Lifecycle::Created | Lifecycle::Installed => Ok(()),
        }
    }

    fn ensure_installed(&self) -> Result<(), NavigationError> {
        match self.lifecycle {
            Lifecycle::Installed => Ok(()),
            Lifecycle::Created | Lifecycle::Detached => Err(NavigationError::Detached),
        }
    }

    fn target_location(&self, target: &NavigationTarget) -> Result<Location, NavigationError> {
        match &target.kind {
            TargetKind::Path(path) => {
                if !target.params.is_empty() {
                    return Err(NavigationError::InvalidParams {
                        route: path.clone(),
                        message: "params can only be supplied with a route name".to_string(),
                    });
                }
                Ok(Location::parse(path)?.with_queries(target.query.clone()))
            }
            TargetKind::Name(name) => {
                self.table
                    .build_location(name, &target.params, &target.query)
            }
        }
    }

    fn transition(
        &mut self,
        target: NavigationTarget,
        kind: NavigationKind,
    ) -> Result<ResolvedRoute, NavigationError> {
        self.ensure_attached()?;

        let location = self.target_location(&target).inspect_err(|e| {
            warn!("Navigation to '{}' rejected: {}", target, e);
        })?;

        let route = match self.table.resolve(&location) {
            Resolution::Matched(route) => route,
            Resolution::NotFound { location } => {
                warn!("Navigation to '{}' rejected: no route matches", target);
                return Err(NavigationError::NotFound {
                    path: location.to_string(),
                });
            }
        };

        if self.history.location() == &route.location {
            debug!("Already at {}, navigation skipped", route.location);
            return Ok(route);
        }

        match kind {
            NavigationKind::Replace => self.history.replace(route.location.clone()),
            _ => self.history.push(route.location.clone()),
        }

        info!(
            "Navigated to '{}' ({}) via {:?}",
            route.name(),
            route.location,
            kind
        );
        self.commit(Resolution::Matched(route.clone()), kind);
        Ok(route)
    }

    fn pop(&mut self, delta: isize) -> Result<&Resolution, NavigationError> {
        if delta == 0 {
            debug!("History moved 0 entries, navigation skipped");
            return Ok(&self.current);
        }

        let location = self
            .history
            .go(delta)
            .ok_or(NavigationError::OutOfRange { delta })?;

        let resolution = self.table.resolve(&location);
        self.sync_redirect(&resolution);

        match &resolution {
            Resolution::Matched(route) => info!("History moved {} to '{}'", delta, route.name()),
            Resolution::NotFound { location } => {
                warn!("History moved {} to unknown location {}", delta, location)
            }
        }

        self.commit(resolution, NavigationKind::Pop);
        Ok(&self.current)
    }

    /// A redirect followed on an existing entry rewrites that entry
    fn sync_redirect(&mut self, resolution: &Resolution) {
        if let Resolution::Matched(route) = resolution {
            if route.redirected_from.is_some() && self.history.location() != &route.location {
                self.history.replace(route.location.clone());
            }
        }
    }

    fn commit(&mut self, to: Resolution, kind: NavigationKind) {
        let from = std::mem::replace(&mut self.current, to.clone());
        let change = RouteChange { from, to, kind };
        for (_, listener) in self.listeners.iter_mut() {
            listener(&change);
        }
    }
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("mode", &self.history.mode())
            .field("current", &self.current.location().to_string())
            .field("routes", &self.table.len())
            .field("listeners", &self.listeners.len())
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}

/// Builder collecting routes and a history strategy into a [`Navigator`]
pub struct NavigatorBuilder {
    routes: Vec<RouteDescriptor>,
    history: Option<Box<dyn History>>,
}

impl NavigatorBuilder {
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            history: None,
        }
    }

    /// Add a route displaying `view`
    pub fn route(
        mut self,
        path: impl Into<String>,
        name: impl Into<RouteName>,
        view: ViewRef,
    ) -> Self {
        self.routes.push(RouteDescriptor::new(path, name, view));
        self
    }

    /// Add a redirect route
    pub fn redirect(
        mut self,
        path: impl Into<String>,
        name: impl Into<RouteName>,
        target: impl Into<String>,
    ) -> Self {
        self.routes.push(RouteDescriptor::redirect(path, name, target));
        self
    }

    /// Add a prepared descriptor
    pub fn descriptor(mut self, descriptor: RouteDescriptor) -> Self {
        self.routes.push(descriptor);
        self
    }

    /// Use a specific history backend (clean-URL history at the root by default)
    pub fn history(mut self, history: Box<dyn History>) -> Self {
        self.history = Some(history);
        self
    }

    /// Validate the routes and build the navigator
    pub fn build(self) -> Result<Navigator, ConfigurationError> {
        let table = RouteTable::new(self.routes)?;
        let history = match self.history {
            Some(history) => history,
            None => super::history::create_history(
                HistoryMode::Web,
                "/",
                super::history::DEFAULT_MAX_ENTRIES,
            )?,
        };
        Ok(Navigator::new(table, history))
    }
}

impl Default for NavigatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::history::{HashHistory, MemoryHistory, WebHistory};
    use crate::view::StaticView;
    use std::sync::Mutex;

    fn view(name: &str) -> ViewRef {
        StaticView::new(name, name).into_ref()
    }

    fn navigator() -> Navigator {
        Navigator::builder()
            .route("/", "Home", view("Home"))
            .route("/reservation", "Reservation", view("Reservation"))
            .route("/reservation/:id", "ReservationDetail", view("Reservation"))
            .redirect("/book", "Book", "Reservation")
            .history(Box::new(MemoryHistory::new()))
            .build()
            .expect("valid navigator")
    }

    fn current_path(navigator: &Navigator) -> String {
        navigator.current().location().path().to_string()
    }

    #[test]
    fn test_initial_route_from_history() {
        let mut navigator = navigator();
        assert_eq!(navigator.current_route().unwrap().name().as_str(), "Home");

        let resolution = navigator.install();
        assert!(resolution.is_matched());
        assert!(navigator.is_installed());
    }

    #[test]
    fn test_navigate_by_name_updates_current() {
        let mut navigator = navigator();
        navigator.install();

        let route = navigator.navigate("Reservation").unwrap();
        assert_eq!(route.path(), "/reservation");

        let current = navigator.current_location().path().to_string();
        let resolved = navigator.resolve(&current);
        assert_eq!(resolved.route().unwrap().name().as_str(), "Reservation");
    }

    #[test]
    fn test_navigate_then_back() {
        let mut navigator = navigator();
        navigator.install();

        navigator.navigate("/").unwrap();
        navigator.navigate("/reservation").unwrap();
        navigator.handle_pop(PopEvent::Back).unwrap();

        assert_eq!(current_path(&navigator), "/");
        assert_eq!(navigator.current_route().unwrap().name().as_str(), "Home");
        assert!(navigator.can_go_forward());

        navigator.forward().unwrap();
        assert_eq!(current_path(&navigator), "/reservation");
    }

    #[test]
    fn test_navigate_unknown_targets() {
        let mut navigator = navigator();

        let err = navigator.navigate("/unknown").unwrap_err();
        assert_eq!(
            err,
            NavigationError::NotFound {
                path: "/unknown".to_string()
            }
        );

        let err = navigator.navigate("Menu").unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnknownRoute {
                name: "Menu".to_string()
            }
        );

        // Nothing changed
        assert_eq!(current_path(&navigator), "/");
        assert_eq!(navigator.history().entries().len(), 1);
    }

    #[test]
    fn test_navigate_with_params() {
        let mut navigator = navigator();

        let route = navigator
            .navigate(NavigationTarget::named("ReservationDetail").with_param("id", "12"))
            .unwrap();
        assert_eq!(route.path(), "/reservation/12");
        assert_eq!(route.param("id"), Some("12"));

        let err = navigator.navigate("ReservationDetail").unwrap_err();
        assert!(matches!(err, NavigationError::InvalidParams { .. }));

        let err = navigator
            .navigate(NavigationTarget::path("/reservation").with_param("id", "1"))
            .unwrap_err();
        assert!(matches!(err, NavigationError::InvalidParams { .. }));
    }

    #[test]
    fn test_duplicate_navigation_is_noop() {
        let mut navigator = navigator();
        let changes = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&changes);
        navigator.subscribe(move |_| *counter.lock().unwrap() += 1);

        navigator.navigate("/reservation").unwrap();
        navigator.navigate("/reservation").unwrap();

        assert_eq!(*changes.lock().unwrap(), 1);
        assert_eq!(navigator.history().entries().len(), 2);
    }

    #[test]
    fn test_replace_does_not_grow_history() {
        let mut navigator = navigator();
        navigator.replace("Reservation").unwrap();

        assert_eq!(navigator.history().entries().len(), 1);
        assert!(!navigator.can_go_back());
        assert_eq!(current_path(&navigator), "/reservation");
    }

    #[test]
    fn test_redirect_writes_final_location() {
        let mut navigator = navigator();
        let route = navigator.navigate("/book?party=3").unwrap();

        assert_eq!(route.name().as_str(), "Reservation");
        assert_eq!(navigator.current_location().to_string(), "/reservation?party=3");
    }

    #[test]
    fn test_subscribers_receive_changes() {
        let mut navigator = navigator();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = navigator.subscribe(move |change: &RouteChange| {
            sink.lock()
                .unwrap()
                .push((change.kind, change.to.location().path().to_string()));
        });

        navigator.install();
        navigator.navigate("/reservation").unwrap();
        navigator.back().unwrap();

        assert!(navigator.unsubscribe(id));
        assert!(!navigator.unsubscribe(id));
        navigator.forward().unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (NavigationKind::Initial, "/".to_string()),
                (NavigationKind::Push, "/reservation".to_string()),
                (NavigationKind::Pop, "/".to_string()),
            ]
        );
    }

    #[test]
    fn test_pop_out_of_range() {
        let mut navigator = navigator();
        navigator.install();

        let err = navigator.handle_pop(PopEvent::Back).unwrap_err();
        assert_eq!(err, NavigationError::OutOfRange { delta: -1 });
        assert_eq!(current_path(&navigator), "/");
    }

    #[test]
    fn test_pop_to_unknown_location_is_not_found() {
        let history = MemoryHistory::starting_at(Location::new("/gone"));
        let mut navigator = Navigator::builder()
            .route("/", "Home", view("Home"))
            .history(Box::new(history))
            .build()
            .unwrap();

        assert!(!navigator.install().is_matched());
        navigator.navigate("/").unwrap();
        let resolution = navigator.back().unwrap();
        assert!(matches!(resolution, Resolution::NotFound { .. }));
    }

    #[test]
    fn test_external_events_require_install() {
        let mut navigator = navigator();
        assert_eq!(
            navigator.handle_pop(PopEvent::Back).unwrap_err(),
            NavigationError::Detached
        );

        navigator.install();
        navigator.intercept_link("/reservation").unwrap();
        assert_eq!(current_path(&navigator), "/reservation");

        navigator.teardown();
        assert_eq!(
            navigator.intercept_link("/").unwrap_err(),
            NavigationError::Detached
        );
        assert_eq!(navigator.navigate("/").unwrap_err(), NavigationError::Detached);
        assert_eq!(current_path(&navigator), "/reservation");
    }

    #[test]
    fn test_hrefs_follow_history_mode() {
        let web = Navigator::builder()
            .route("/", "Home", view("Home"))
            .route("/reservation", "Reservation", view("Reservation"))
            .history(Box::new(WebHistory::new("/app").unwrap()))
            .build()
            .unwrap();
        assert_eq!(web.href("Reservation").unwrap(), "/app/reservation");

        let mut hash = Navigator::builder()
            .route("/", "Home", view("Home"))
            .route("/reservation", "Reservation", view("Reservation"))
            .history(Box::new(HashHistory::new("/").unwrap()))
            .build()
            .unwrap();
        assert_eq!(hash.href("/reservation").unwrap(), "/#/reservation");

        hash.install();
        hash.intercept_link("/#/reservation").unwrap();
        assert_eq!(hash.current_location().path(), "/reservation");
    }

    #[test]
    fn test_resolve_is_not_an_error() {
        let navigator = navigator();
        assert!(matches!(navigator.resolve("/unknown"), Resolution::NotFound { .. }));
        assert!(matches!(navigator.resolve("no-slash"), Resolution::NotFound { .. }));
        assert_eq!(
            navigator.resolve("/reservation").route().unwrap().pattern(),
            "/reservation"
        );
    }
    #[test]
    fn test_go_zero_does_not_notify() {
        let mut navigator = navigator();
        navigator.install();
        navigator.navigate("/reservation").unwrap();

        let changes = Arc::new(Mutex::new(0));
        let seen = changes.clone();
        navigator.subscribe(move |_| *seen.lock().unwrap() += 1);

        navigator.handle_pop(PopEvent::Go(0)).unwrap();
        navigator.go(0).unwrap();

        assert_eq!(*changes.lock().unwrap(), 0);
        assert_eq!(current_path(&navigator), "/reservation");
        assert_eq!(navigator.history().entries().len(), 2);
    }

    #[test]
    fn test_named_params_round_trip_through_href() {
        let mut navigator = Navigator::builder()
            .route("/", "Home", view("Home"))
            .route("/guest/:name", "Guest", view("Guest"))
            .history(Box::new(MemoryHistory::new()))
            .build()
            .unwrap();
        navigator.install();

        let target = NavigationTarget::named("Guest").with_param("name", "Ada Lovelace");
        let route = navigator.navigate(target.clone()).unwrap();
        assert_eq!(route.path(), "/guest/Ada%20Lovelace");
        assert_eq!(route.param("name"), Some("Ada Lovelace"));

        let href = navigator.href(target).unwrap();
        assert_eq!(href, "/guest/Ada%20Lovelace");
        assert_eq!(
            navigator.resolve(&href).route().unwrap().param("name"),
            Some("Ada Lovelace")
        );

        navigator.intercept_link(&href).unwrap();
        assert_eq!(navigator.history().entries().len(), 2);
    }

    #[test]
    fn test_off_site_links_rejected() {
        let mut navigator = navigator();
        navigator.install();

        for href in ["//evil.example/reservation", "/\\evil.example/reservation"] {
            assert!(
                matches!(
                    navigator.intercept_link(href),
                    Err(NavigationError::InvalidLocation { .. })
                ),
                "expected {:?} to be rejected",
                href
            );
        }
        assert_eq!(current_path(&navigator), "/");
    }
}
