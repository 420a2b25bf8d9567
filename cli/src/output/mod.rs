//! Output formatting for the CLI

pub mod formatters;

pub use formatters::{
    format_change, format_current, format_history, format_resolution, format_route_table,
};
