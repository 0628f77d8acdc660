//! # Routing
//!
//! The portal's route declarations and the router construction call.

use denta_router::{HistoryMode, RouteEntry, Router, RouteTable};

use crate::views::View;

/// The portal's route table.
///
/// One entry per page, declared flat. The literal list is statically
/// valid; a construction failure here is a programmer error in the
/// declarations below, so startup fails fast.
pub fn route_table() -> RouteTable<View> {
    RouteTable::new(vec![
        // Public pages
        RouteEntry::new("/", "home", View::Home),
        RouteEntry::new("/contacts", "contacts", View::Contacts),
        RouteEntry::new("/services", "services", View::Services),
        RouteEntry::new("/doctors", "doctors", View::Doctors),
        RouteEntry::new("/reviews", "reviews", View::Reviews),
        // Signed-in pages
        RouteEntry::new("/account", "account", View::Account),
        RouteEntry::new("/doctor-account", "doctor-account", View::DoctorAccount),
    ])
    .expect("portal route table is statically valid")
}

/// Builds the portal router in the given navigation mode.
pub fn router(mode: HistoryMode) -> Router<View> {
    Router::new(route_table(), mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_builds() {
        let table = route_table();
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn root_is_home() {
        let table = route_table();

        let entry = table.resolve_path("/").unwrap();
        assert_eq!(entry.name(), "home");
        assert_eq!(*entry.view(), View::Home);
    }

    #[test]
    fn router_starts_on_home() {
        let router = router(HistoryMode::Browser);
        assert_eq!(*router.current().unwrap().view(), View::Home);
    }
}
