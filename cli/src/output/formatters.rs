//! Formatters for routes, resolutions and history

use colored::Colorize;
use tablebook_core::router::{History, NavigationKind, RouteChange, RouteTable};
use tablebook_core::{Location, Navigator, Resolution};

/// Format the route table in match order, with the href each route produces
pub fn format_route_table(table: &RouteTable, history: &dyn History) -> String {
    let mut lines = vec![format!(
        "{} ({} history, base '{}')",
        "Routes".bold(),
        history.mode(),
        if history.base().is_empty() { "/" } else { history.base() }
    )];

    for route in table.iter() {
        let target = match (&route.redirect, route.view_name()) {
            (Some(redirect), _) => format!("-> {}", redirect),
            (None, Some(view)) => format!("view {}", view),
            (None, None) => "-".to_string(),
        };
        lines.push(format!(
            "  {:<16} {:<24} {:<22} {}",
            route.name.as_str().cyan(),
            route.path,
            target,
            history.href(&Location::new(&route.path)).dimmed()
        ));
    }

    lines.join("\n")
}

/// Format a resolution result
pub fn format_resolution(resolution: &Resolution) -> String {
    match resolution {
        Resolution::Matched(route) => {
            let mut line = format!(
                "{} {} -> {} (pattern {})",
                "✓".green(),
                route.location,
                route.name().as_str().cyan(),
                route.pattern()
            );
            if let Some(view) = route.view() {
                line.push_str(&format!(", view {}", view.title()));
            }
            if !route.params.is_empty() {
                let params: Vec<String> = route
                    .params
                    .iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                line.push_str(&format!(", params {}", params.join(" ")));
            }
            if let Some(from) = &route.redirected_from {
                line.push_str(&format!(", redirected from {}", from));
            }
            line
        }
        Resolution::NotFound { location } => {
            format!("{} {} -> {}", "✗".red(), location, "not found".yellow())
        }
    }
}

/// Format the current route of a navigator
pub fn format_current(navigator: &Navigator) -> String {
    match navigator.current() {
        Resolution::Matched(route) => format!(
            "Current route: {} ({})",
            route.name().as_str().bold(),
            navigator.history().href(&route.location)
        ),
        Resolution::NotFound { location } => format!(
            "Current route: {} ({})",
            "not found".yellow(),
            navigator.history().href(location)
        ),
    }
}

/// Format the history stack, oldest first, marking the current entry
pub fn format_history(history: &dyn History) -> String {
    let position = history.stack().position();
    let mut lines = vec!["History".bold().to_string()];

    for (index, entry) in history.entries().iter().enumerate() {
        let marker = if index == position { ">" } else { " " };
        lines.push(format!(
            "  {} {} {}",
            marker,
            history.href(&entry.location),
            entry.visited_at.format("%H:%M:%S").to_string().dimmed()
        ));
    }

    lines.join("\n")
}

/// Format a route change notification
pub fn format_change(change: &RouteChange) -> String {
    let label = match change.kind {
        NavigationKind::Initial => "start",
        NavigationKind::Push => "push",
        NavigationKind::Replace => "replace",
        NavigationKind::Pop => "pop",
    };

    let describe = |resolution: &Resolution| match resolution.route() {
        Some(route) => format!("{} ({})", route.name(), route.location),
        None => format!("not found ({})", resolution.location()),
    };

    format!(
        "{} {} -> {}",
        format!("[{}]", label).dimmed(),
        describe(&change.from),
        describe(&change.to)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablebook_core::router::MemoryHistory;
    use tablebook_core::{app, PopEvent};

    fn navigator() -> Navigator {
        colored::control::set_override(false);
        let table = app::router_config().build_table(&app::views()).unwrap();
        Navigator::new(table, Box::new(MemoryHistory::new()))
    }

    #[test]
    fn test_format_route_table() {
        let navigator = navigator();
        let output = format_route_table(navigator.routes(), navigator.history());

        assert!(output.starts_with("Routes (memory history, base '/')"));
        assert!(output.contains("Home"));
        assert!(output.contains("/reservation"));
        assert!(output.contains("view Reservation"));
    }

    #[test]
    fn test_format_resolution() {
        let navigator = navigator();

        let matched = format_resolution(&navigator.resolve("/reservation?party=2"));
        assert!(matched.contains("/reservation?party=2 -> Reservation"));
        assert!(matched.contains("view Make a reservation"));

        let missing = format_resolution(&navigator.resolve("/unknown"));
        assert!(missing.contains("/unknown -> not found"));
    }

    #[test]
    fn test_format_current_and_history() {
        let mut navigator = navigator();
        navigator.install();
        navigator.navigate("Reservation").unwrap();
        navigator.handle_pop(PopEvent::Back).unwrap();

        assert_eq!(format_current(&navigator), "Current route: Home (/)");

        let history = format_history(navigator.history());
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  > /"));
        assert!(lines[2].starts_with("    /reservation"));
    }

    #[test]
    fn test_format_change() {
        let mut navigator = navigator();
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = seen.clone();
        navigator.subscribe(move |change: &RouteChange| {
            sink.lock().unwrap().push(format_change(change));
        });

        navigator.navigate("/reservation").unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec!["[push] Home (/) -> Reservation (/reservation)".to_string()]
        );
    }
}
