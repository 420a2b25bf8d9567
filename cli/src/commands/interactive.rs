//! Interactive mode command
//!
//! Reads commands from stdin, one per line, and plays the browser's part:
//! navigation requests, back/forward presses and link clicks.

use super::build_navigator;
use crate::config::CliConfigLoader;
use crate::output::{
    format_change, format_current, format_history, format_resolution, format_route_table,
};
use crate::steps::Step;
use anyhow::Result;
use colored::Colorize;
use tablebook_core::router::RouteChange;
use tablebook_core::{App, Navigator};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

const HELP: &str = "\
Commands:
  <path> | <name>      navigate to a path or a route name
  replace <target>     navigate without adding a history entry
  link <href>          follow a link as the page would
  back | forward       press the back/forward button
  go <n>               move n entries through history
  resolve <path>       show what a path resolves to
  routes               list routes
  where                show the current route
  history              show the history stack
  help                 show this help
  quit                 leave";

/// Outcome of one line of input
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Start interactive mode
pub async fn interactive_command(config_loader: CliConfigLoader) -> Result<()> {
    let loaded = config_loader.load().await?;
    debug!("Interactive session using {}", loaded.source);

    let mut navigator = build_navigator(&loaded.config)?;
    navigator.subscribe(|change: &RouteChange| println!("{}", format_change(change)));
    let mut app = App::new(navigator);

    println!("{}", "tablebook navigator".bold());
    println!("Type 'help' for commands.");
    println!("Showing: {}", app.screen().title());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if handle_line(&mut app, &line) == Flow::Quit {
            break;
        }
    }

    app.shutdown();
    Ok(())
}

fn handle_line(app: &mut App, line: &str) -> Flow {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    let step = match command {
        "" => return Flow::Continue,
        "quit" | "exit" => return Flow::Quit,
        "help" => {
            println!("{}", HELP);
            return Flow::Continue;
        }
        "routes" => {
            let navigator = app.navigator();
            println!("{}", format_route_table(navigator.routes(), navigator.history()));
            return Flow::Continue;
        }
        "where" => {
            println!("{}", format_current(app.navigator()));
            return Flow::Continue;
        }
        "history" => {
            println!("{}", format_history(app.navigator().history()));
            return Flow::Continue;
        }
        "resolve" => {
            println!("{}", format_resolution(&app.navigator().resolve(argument)));
            return Flow::Continue;
        }
        "replace" => format!("replace:{}", argument).parse::<Step>(),
        "link" => format!("link:{}", argument).parse::<Step>(),
        "go" => format!("go:{}", argument).parse::<Step>(),
        _ => line.parse::<Step>(),
    };

    match step {
        Ok(step) => apply(app.navigator_mut(), &step),
        Err(e) => eprintln!("{} {}", "error:".red(), e),
    }
    println!("Showing: {}", app.screen().title());
    Flow::Continue
}

fn apply(navigator: &mut Navigator, step: &Step) {
    if let Err(e) = step.apply(navigator) {
        eprintln!("{} {}", "error:".red(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablebook_core::app as routes;
    use tablebook_core::router::MemoryHistory;

    fn app() -> App {
        let table = routes::router_config().build_table(&routes::views()).unwrap();
        App::new(Navigator::new(table, Box::new(MemoryHistory::new())))
    }

    #[test]
    fn test_session_navigation() {
        let mut app = app();

        for line in ["Reservation", "back", "forward", "replace Home", "go -1"] {
            assert_eq!(handle_line(&mut app, line), Flow::Continue);
        }

        // replace overwrote /reservation, and go -1 lands on the first entry
        assert_eq!(app.navigator().current_location().path(), "/");
        assert!(!app.navigator().can_go_back());
    }

    #[test]
    fn test_session_errors_do_not_stop() {
        let mut app = app();

        assert_eq!(handle_line(&mut app, "/unknown"), Flow::Continue);
        assert_eq!(handle_line(&mut app, "go nowhere"), Flow::Continue);
        assert_eq!(handle_line(&mut app, "link https://example.com"), Flow::Continue);
        assert_eq!(app.navigator().current_location().path(), "/");

        assert_eq!(handle_line(&mut app, "quit"), Flow::Quit);
    }
}
