//! Router module: route table, history backends and navigator
//!
//! This module provides client-side routing for the application: routes map
//! URL paths to views, and a navigator moves between them without reloads.

pub mod history;
pub mod location;
pub mod navigator;
pub mod pattern;
pub mod route;
pub mod table;

// Re-export commonly used types
pub use history::{
    create_history, HashHistory, History, HistoryEntry, HistoryStack, MemoryHistory, WebHistory,
};
pub use location::Location;
pub use navigator::{
    NavigationKind, NavigationTarget, Navigator, NavigatorBuilder, PopEvent, RouteChange,
    SubscriptionId,
};
pub use pattern::PathPattern;
pub use route::{Resolution, ResolvedRoute, RouteDescriptor, RouteName};
pub use table::RouteTable;
