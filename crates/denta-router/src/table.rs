//! Route table construction and lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Result, RouteEntry, RouterError};

/// An immutable, validated collection of routes.
///
/// A table is assembled once, at startup, from a literal entry list. Every
/// invariant — well-formed paths, non-empty names, pairwise-distinct paths
/// and names — is checked by [`RouteTable::new`], so a constructed table
/// cannot hold a bad entry and lookups never need to re-validate.
///
/// Paths in this layer are static literals; there are no dynamic segments
/// or catch-all patterns to order by priority, which keeps resolution a
/// plain index lookup. Resolved entries come back as shared handles
/// ([`Arc`]) so callers can keep them past a borrow of the table.
#[derive(Debug)]
pub struct RouteTable<V> {
    entries: Vec<Arc<RouteEntry<V>>>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl<V> RouteTable<V> {
    /// Builds a table from `entries`, validating every invariant.
    ///
    /// Paths are normalized before uniqueness is checked, so `/services`
    /// and `/services/` count as the same route. The first violation is
    /// reported; nothing is built on error.
    pub fn new(entries: Vec<RouteEntry<V>>) -> Result<Self> {
        let mut table = Self {
            entries: Vec::with_capacity(entries.len()),
            by_path: HashMap::with_capacity(entries.len()),
            by_name: HashMap::with_capacity(entries.len()),
        };

        for mut entry in entries {
            entry.path = normalize_path(&entry.path)?;
            if entry.name.is_empty() {
                return Err(RouterError::EmptyName(entry.path));
            }

            let index = table.entries.len();
            if table.by_path.insert(entry.path.clone(), index).is_some() {
                return Err(RouterError::DuplicatePath(entry.path));
            }
            if table.by_name.insert(entry.name.clone(), index).is_some() {
                return Err(RouterError::DuplicateName(entry.name));
            }
            table.entries.push(Arc::new(entry));
        }

        tracing::debug!(routes = table.entries.len(), "route table built");
        Ok(table)
    }

    /// Resolves a path to its entry.
    ///
    /// The lookup tolerates trailing slashes. Anything else that fails to
    /// match a registered literal is reported as unresolved — malformed
    /// input is a miss, never a validation error.
    pub fn resolve_path(&self, path: &str) -> Result<Arc<RouteEntry<V>>> {
        self.by_path
            .get(trim_trailing_slashes(path))
            .map(|&index| Arc::clone(&self.entries[index]))
            .ok_or_else(|| RouterError::UnresolvedPath(path.to_string()))
    }

    /// Resolves a symbolic name to its entry.
    pub fn resolve_name(&self, name: &str) -> Result<Arc<RouteEntry<V>>> {
        self.by_name
            .get(name)
            .map(|&index| Arc::clone(&self.entries[index]))
            .ok_or_else(|| RouterError::UnresolvedName(name.to_string()))
    }

    /// Returns true if a route is registered under `path`.
    pub fn contains_path(&self, path: &str) -> bool {
        self.by_path.contains_key(trim_trailing_slashes(path))
    }

    /// The registered entries, in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry<V>> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips trailing slashes from a path, keeping the root `/` intact.
fn trim_trailing_slashes(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && path.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

/// Validates a declared path and returns its normalized form.
fn normalize_path(path: &str) -> Result<String> {
    let invalid = |reason: &'static str| RouterError::InvalidPath {
        path: path.to_string(),
        reason,
    };

    if !path.starts_with('/') {
        return Err(invalid("must start with `/`"));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    if path.contains('?') || path.contains('#') {
        return Err(invalid("query and fragment markers do not belong in a route path"));
    }

    let trimmed = trim_trailing_slashes(path);
    if path != "/" && trimmed == "/" {
        return Err(invalid("empty path segment"));
    }
    if trimmed != "/" && trimmed[1..].split('/').any(str::is_empty) {
        return Err(invalid("empty path segment"));
    }

    Ok(trimmed.to_string())
}
