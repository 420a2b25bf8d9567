//! Minimal configuration module for tablebook core
//!
//! Only exports pure data types. All loading logic is in CLI layer.

pub mod types;

pub use types::{HistoryMode, RouteConfig, RouterConfig};
