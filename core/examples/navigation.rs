//! Example demonstrating the application router outside a browser
//!
//! Builds the two-route table, hands the navigator to the app root, and
//! replays a short browsing session including a back button press.

use tablebook_core::router::{MemoryHistory, NavigationTarget, PopEvent, RouteChange};
use tablebook_core::{app, App, Navigator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tablebook_core::init_tracing_with_debug(false);

    let table = app::router_config().build_table(&app::views())?;
    let mut navigator = Navigator::new(table, Box::new(MemoryHistory::new()));

    navigator.subscribe(|change: &RouteChange| {
        println!(
            "{:?}: {} -> {}",
            change.kind,
            change.from.location(),
            change.to.location()
        );
    });

    let mut app = App::new(navigator);
    println!("Showing: {}", app.screen().title());

    app.navigator_mut()
        .navigate(NavigationTarget::named(app::RESERVATION).with_query("party", "4"))?;
    println!("Showing: {}", app.screen().title());

    app.navigator_mut().handle_pop(PopEvent::Back)?;
    println!("Showing: {}", app.screen().title());

    match app.navigator().resolve("/menu").route() {
        Some(route) => println!("/menu resolves to {}", route.name()),
        None => println!("/menu is not a route"),
    }

    Ok(())
}
