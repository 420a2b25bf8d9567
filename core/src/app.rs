//! The reservation application's routes and root composition
//!
//! | Path           | Name        | View        |
//! |----------------|-------------|-------------|
//! | `/`            | Home        | Home        |
//! | `/reservation` | Reservation | Reservation |

use crate::config::{HistoryMode, RouteConfig, RouterConfig};
use crate::error::Result;
use crate::router::{Navigator, Resolution};
use crate::view::{StaticView, ViewRef, ViewRegistry};

pub const HOME: &str = "Home";
pub const RESERVATION: &str = "Reservation";

/// Views shipped with the application
pub fn views() -> ViewRegistry {
    ViewRegistry::new()
        .register(HOME, || StaticView::new(HOME, "Home").into_ref())
        .register(RESERVATION, || {
            StaticView::new(RESERVATION, "Make a reservation").into_ref()
        })
}

/// The application's route configuration: clean-URL history at the root
pub fn router_config() -> RouterConfig {
    RouterConfig::new()
        .with_history(HistoryMode::Web)
        .with_base("/")
        .add_route(RouteConfig::new("/", HOME, HOME))
        .add_route(RouteConfig::new("/reservation", RESERVATION, RESERVATION))
}

/// Create the application navigator
pub fn create_router() -> Result<Navigator> {
    router_config().build_navigator(&views())
}

/// What the root should display
#[derive(Clone)]
pub enum Screen {
    /// The view of the matched route
    View(ViewRef),
    /// Fallback for locations no route matches
    NotFound { path: String },
}

impl Screen {
    pub fn title(&self) -> String {
        match self {
            Screen::View(view) => view.title().to_string(),
            Screen::NotFound { path } => format!("Page not found: {}", path),
        }
    }
}

/// Root composition: owns the navigator it is given
#[derive(Debug)]
pub struct App {
    navigator: Navigator,
}

impl App {
    /// Take ownership of the navigator and attach it to history events
    pub fn new(mut navigator: Navigator) -> Self {
        navigator.install();
        Self { navigator }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    /// Screen for the current route
    pub fn screen(&self) -> Screen {
        match self.navigator.current() {
            Resolution::Matched(route) => match route.view() {
                Some(view) => Screen::View(view.clone()),
                None => Screen::NotFound {
                    path: route.path().to_string(),
                },
            },
            Resolution::NotFound { location } => Screen::NotFound {
                path: location.path().to_string(),
            },
        }
    }

    /// Detach from history events
    pub fn shutdown(mut self) -> Navigator {
        self.navigator.teardown();
        self.navigator
    }
}
