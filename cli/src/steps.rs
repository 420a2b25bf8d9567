//! Navigation steps accepted by `navigate` and the interactive session
//!
//! A step is a path (`/reservation`), a route name (`Reservation`), or one
//! of `back`, `forward`, `go:<n>`, `replace:<target>` and `link:<href>`.

use std::str::FromStr;
use tablebook_core::{NavigationError, NavigationTarget, Navigator, PopEvent, Resolution};

/// One navigation step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Push a new entry
    Visit(NavigationTarget),
    /// Overwrite the current entry
    Replace(NavigationTarget),
    /// Activate a link, as if clicked in the page
    Link(String),
    /// Browser back/forward controls
    Pop(PopEvent),
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty navigation step".to_string());
        }

        match s {
            "back" => return Ok(Step::Pop(PopEvent::Back)),
            "forward" => return Ok(Step::Pop(PopEvent::Forward)),
            _ => {}
        }

        if let Some(delta) = s.strip_prefix("go:") {
            return delta
                .parse::<isize>()
                .map(|delta| Step::Pop(PopEvent::Go(delta)))
                .map_err(|_| format!("invalid history offset '{}'", delta));
        }
        if let Some(target) = s.strip_prefix("replace:") {
            return Ok(Step::Replace(NavigationTarget::parse(target)));
        }
        if let Some(href) = s.strip_prefix("link:") {
            return Ok(Step::Link(href.to_string()));
        }

        Ok(Step::Visit(NavigationTarget::parse(s)))
    }
}

impl Step {
    /// Apply the step to an installed navigator
    pub fn apply(&self, navigator: &mut Navigator) -> Result<Resolution, NavigationError> {
        match self {
            Step::Visit(target) => navigator.navigate(target.clone()).map(Resolution::Matched),
            Step::Replace(target) => navigator.replace(target.clone()).map(Resolution::Matched),
            Step::Link(href) => navigator.intercept_link(href).map(Resolution::Matched),
            Step::Pop(event) => navigator.handle_pop(*event).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tablebook_core::app;
    use tablebook_core::router::MemoryHistory;

    #[test]
    fn test_parse_steps() {
        assert_eq!("back".parse::<Step>().unwrap(), Step::Pop(PopEvent::Back));
        assert_eq!("forward".parse::<Step>().unwrap(), Step::Pop(PopEvent::Forward));
        assert_eq!("go:-2".parse::<Step>().unwrap(), Step::Pop(PopEvent::Go(-2)));
        assert_eq!(
            "/reservation".parse::<Step>().unwrap(),
            Step::Visit(NavigationTarget::path("/reservation"))
        );
        assert_eq!(
            "Reservation".parse::<Step>().unwrap(),
            Step::Visit(NavigationTarget::named("Reservation"))
        );
        assert_eq!(
            "replace:Home".parse::<Step>().unwrap(),
            Step::Replace(NavigationTarget::named("Home"))
        );
        assert_eq!(
            "link:/reservation".parse::<Step>().unwrap(),
            Step::Link("/reservation".to_string())
        );

        assert!("go:x".parse::<Step>().is_err());
        assert!("  ".parse::<Step>().is_err());
    }

    #[test]
    fn test_apply_steps() {
        let table = app::router_config().build_table(&app::views()).unwrap();
        let mut navigator = Navigator::new(table, Box::new(MemoryHistory::new()));
        navigator.install();

        for step in ["/", "/reservation", "back"] {
            step.parse::<Step>().unwrap().apply(&mut navigator).unwrap();
        }
        assert_eq!(navigator.current_location().path(), "/");

        let err = "go:5".parse::<Step>().unwrap().apply(&mut navigator).unwrap_err();
        assert_eq!(err, NavigationError::OutOfRange { delta: 5 });
    }
}
