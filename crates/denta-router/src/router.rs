//! The navigation handle tying the table and the history together.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::{HistoryMode, MemoryHistory, Result, RouteEntry, RouteTable};

/// The history-aware navigation handle.
///
/// A router owns a shared, immutable [`RouteTable`] and the one piece of
/// mutable state this layer has: the visited-path history and the entry it
/// currently points at. The table side is freely shareable across readers;
/// the navigation side sits behind an [`RwLock`] and expects the host to
/// invoke the mutating operations non-concurrently, as UI event loops do.
///
/// Failed navigation changes nothing: an unresolved path or name comes back
/// as an error and the current route stays where it was. No catch-all is
/// registered implicitly; whatever fallback the application wants for an
/// unmatched location is its own to render.
#[derive(Debug)]
pub struct Router<V> {
    table: Arc<RouteTable<V>>,
    mode: HistoryMode,
    state: RwLock<NavState<V>>,
}

#[derive(Debug)]
struct NavState<V> {
    history: MemoryHistory,
    current: Option<Arc<RouteEntry<V>>>,
}

impl<V> Router<V> {
    /// Creates a router starting at the root path `/`.
    ///
    /// If the table registers no root route the router starts with no
    /// current entry, exactly as [`Router::with_initial_path`] would.
    pub fn new(table: impl Into<Arc<RouteTable<V>>>, mode: HistoryMode) -> Self {
        Self::with_initial_path(table, mode, "/")
    }

    /// Creates a router starting at `initial_path` — a deep link.
    ///
    /// The initial location always enters the history, matched or not; if
    /// it does not resolve, the current slot stays empty and the gap is
    /// logged rather than papered over with a fallback view.
    pub fn with_initial_path(
        table: impl Into<Arc<RouteTable<V>>>,
        mode: HistoryMode,
        initial_path: &str,
    ) -> Self {
        let table = table.into();
        let mut history = MemoryHistory::new();

        let current = match table.resolve_path(initial_path) {
            Ok(entry) => {
                history.push(entry.path());
                Some(entry)
            }
            Err(_) => {
                tracing::warn!(path = initial_path, "initial location matches no route");
                history.push(initial_path);
                None
            }
        };

        Self {
            table,
            mode,
            state: RwLock::new(NavState { history, current }),
        }
    }

    /// Navigates to `path`, pushing a new history entry.
    ///
    /// The canonical (normalized) route path is what enters the history,
    /// so `/services/` and `/services` leave the same trace.
    pub fn push(&self, path: &str) -> Result<Arc<RouteEntry<V>>> {
        let entry = self.table.resolve_path(path)?;
        self.apply(entry, NavKind::Push)
    }

    /// Navigates to `path`, replacing the current history entry.
    pub fn replace(&self, path: &str) -> Result<Arc<RouteEntry<V>>> {
        let entry = self.table.resolve_path(path)?;
        self.apply(entry, NavKind::Replace)
    }

    /// Navigates to the route named `name`, pushing a new history entry.
    pub fn push_named(&self, name: &str) -> Result<Arc<RouteEntry<V>>> {
        let entry = self.table.resolve_name(name)?;
        self.apply(entry, NavKind::Push)
    }

    /// Navigates to the route named `name`, replacing the current entry.
    pub fn replace_named(&self, name: &str) -> Result<Arc<RouteEntry<V>>> {
        let entry = self.table.resolve_name(name)?;
        self.apply(entry, NavKind::Replace)
    }

    /// Moves one step back in the history.
    ///
    /// Returns the entry the router lands on, or `None` at the boundary
    /// (in which case nothing moves).
    pub fn back(&self) -> Option<Arc<RouteEntry<V>>> {
        let mut state = self.state.write();
        let path = state.history.back()?.to_string();
        state.current = self.table.resolve_path(&path).ok();
        tracing::debug!(to = %path, "navigated back");
        state.current.clone()
    }

    /// Moves one step forward in the history.
    ///
    /// Returns the entry the router lands on, or `None` at the boundary.
    pub fn forward(&self) -> Option<Arc<RouteEntry<V>>> {
        let mut state = self.state.write();
        let path = state.history.forward()?.to_string();
        state.current = self.table.resolve_path(&path).ok();
        tracing::debug!(to = %path, "navigated forward");
        state.current.clone()
    }

    /// The currently active route entry, if the current location resolves.
    pub fn current(&self) -> Option<Arc<RouteEntry<V>>> {
        self.state.read().current.clone()
    }

    /// The path of the current location, resolved or not.
    pub fn current_path(&self) -> Option<String> {
        self.state.read().history.current().map(str::to_string)
    }

    /// The current location rendered as a URL in this router's mode.
    pub fn current_url(&self) -> Option<String> {
        self.current_path().map(|path| self.mode.format_url(&path))
    }

    /// The navigation mode this router was built with.
    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// The route table backing this router.
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Resolves a path without navigating.
    pub fn resolve(&self, path: &str) -> Result<Arc<RouteEntry<V>>> {
        self.table.resolve_path(path)
    }

    /// Resolves a symbolic name without navigating.
    pub fn resolve_name(&self, name: &str) -> Result<Arc<RouteEntry<V>>> {
        self.table.resolve_name(name)
    }

    /// Whether a back navigation would move.
    pub fn can_go_back(&self) -> bool {
        self.state.read().history.can_go_back()
    }

    /// Whether a forward navigation would move.
    pub fn can_go_forward(&self) -> bool {
        self.state.read().history.can_go_forward()
    }

    fn apply(&self, entry: Arc<RouteEntry<V>>, kind: NavKind) -> Result<Arc<RouteEntry<V>>> {
        let mut state = self.state.write();
        let from = state.history.current().unwrap_or("").to_string();
        match kind {
            NavKind::Push => state.history.push(entry.path()),
            NavKind::Replace => state.history.replace(entry.path()),
        }
        state.current = Some(Arc::clone(&entry));
        tracing::debug!(from = %from, to = entry.path(), ?kind, "navigated");
        Ok(entry)
    }
}

#[derive(Debug, Clone, Copy)]
enum NavKind {
    Push,
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RouterError;

    fn portal_router() -> Router<&'static str> {
        let table = RouteTable::new(vec![
            RouteEntry::new("/", "home", "home"),
            RouteEntry::new("/contacts", "contacts", "contacts"),
            RouteEntry::new("/services", "services", "services"),
            RouteEntry::new("/doctors", "doctors", "doctors"),
        ])
        .unwrap();
        Router::new(table, HistoryMode::Browser)
    }

    #[test]
    fn starts_at_the_root() {
        let router = portal_router();

        let current = router.current().unwrap();
        assert_eq!(current.name(), "home");
        assert_eq!(router.current_path().as_deref(), Some("/"));
        assert!(!router.can_go_back());
    }

    #[test]
    fn push_updates_current_and_history() {
        let router = portal_router();

        let entry = router.push("/contacts").unwrap();
        assert_eq!(entry.name(), "contacts");
        assert_eq!(router.current().unwrap().name(), "contacts");
        assert!(router.can_go_back());
    }

    #[test]
    fn failed_push_changes_nothing() {
        let router = portal_router();
        router.push("/services").unwrap();

        let err = router.push("/not-a-real-path").unwrap_err();
        assert_eq!(err, RouterError::UnresolvedPath("/not-a-real-path".to_string()));
        assert_eq!(router.current().unwrap().name(), "services");
        assert_eq!(router.current_path().as_deref(), Some("/services"));
    }

    #[test]
    fn replace_leaves_no_back_entry() {
        let router = portal_router();
        router.push("/contacts").unwrap();

        router.replace("/doctors").unwrap();
        assert_eq!(router.current().unwrap().name(), "doctors");

        let landed = router.back().unwrap();
        assert_eq!(landed.name(), "home");
    }

    #[test]
    fn named_navigation_matches_path_navigation() {
        let router = portal_router();

        let by_name = router.push_named("doctors").unwrap();
        let by_path = router.resolve("/doctors").unwrap();
        assert!(Arc::ptr_eq(&by_name, &by_path));

        let err = router.push_named("pharmacy").unwrap_err();
        assert_eq!(err, RouterError::UnresolvedName("pharmacy".to_string()));
    }

    #[test]
    fn back_and_forward_revisit_entries() {
        let router = portal_router();
        router.push("/contacts").unwrap();
        router.push("/services").unwrap();

        assert_eq!(router.back().unwrap().name(), "contacts");
        assert_eq!(router.back().unwrap().name(), "home");
        assert!(router.back().is_none());
        assert_eq!(router.current().unwrap().name(), "home");

        assert_eq!(router.forward().unwrap().name(), "contacts");
        assert_eq!(router.forward().unwrap().name(), "services");
        assert!(router.forward().is_none());
    }

    #[test]
    fn push_after_back_drops_the_forward_stack() {
        let router = portal_router();
        router.push("/contacts").unwrap();
        router.push("/services").unwrap();
        router.back();

        router.push("/doctors").unwrap();
        assert!(!router.can_go_forward());
        assert_eq!(router.back().unwrap().name(), "contacts");
    }

    #[test]
    fn deep_link_boot_sets_current() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/", "home", ()),
            RouteEntry::new("/account", "account", ()),
        ])
        .unwrap();
        let router = Router::with_initial_path(table, HistoryMode::Browser, "/account");

        assert_eq!(router.current().unwrap().name(), "account");
        assert!(!router.can_go_back());
    }

    #[test]
    fn boot_on_unregistered_location_has_no_current() {
        let table = RouteTable::new(vec![RouteEntry::new("/", "home", ())]).unwrap();
        let router = Router::with_initial_path(table, HistoryMode::Browser, "/gone");

        assert!(router.current().is_none());
        assert_eq!(router.current_path().as_deref(), Some("/gone"));

        // Navigation away from the unmatched location still works.
        assert_eq!(router.push("/").unwrap().name(), "home");
    }

    #[test]
    fn current_url_follows_the_mode() {
        let table = RouteTable::new(vec![
            RouteEntry::new("/", "home", ()),
            RouteEntry::new("/reviews", "reviews", ()),
        ])
        .unwrap();
        let router = Router::new(table, HistoryMode::Hash);
        router.push("/reviews").unwrap();

        assert_eq!(router.current_url().as_deref(), Some("/#/reviews"));
        assert_eq!(router.mode(), HistoryMode::Hash);
    }

    #[test]
    fn shared_table_serves_two_routers() {
        let table = Arc::new(
            RouteTable::new(vec![RouteEntry::new("/", "home", ())]).unwrap(),
        );

        let a = Router::new(Arc::clone(&table), HistoryMode::Browser);
        let b = Router::new(table, HistoryMode::Hash);
        assert_eq!(a.current().unwrap().name(), "home");
        assert_eq!(b.current().unwrap().name(), "home");
    }
}
