//! # Denta
//!
//! Startup shell for the Denta dental-clinic patient portal.
//!
//! Initializes logging, loads the persisted configuration, builds the
//! portal router, and reports the registered table and the initial view.
//! Everything past this point — mounting views, reacting to navigation
//! events — belongs to the hosting UI, which receives the router handle
//! built here.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use denta_app::config::AppConfig;
use denta_app::routes;

fn main() {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    tracing::info!("Starting Denta portal");

    let config = AppConfig::load();
    let router = routes::router(config.history_mode);

    tracing::info!(
        routes = router.table().len(),
        mode = ?router.mode(),
        "router built"
    );
    for entry in router.table().entries() {
        tracing::debug!(
            path = entry.path(),
            name = entry.name(),
            title = entry.view().title(),
            "registered route"
        );
    }

    match router.current() {
        Some(entry) => tracing::info!(
            title = entry.view().title(),
            url = router.current_url().unwrap_or_default(),
            "initial view"
        ),
        None => tracing::warn!("initial location matches no route, nothing to render"),
    }
}
