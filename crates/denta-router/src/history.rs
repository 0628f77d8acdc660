//! Navigation history: the mode selector and the in-process provider.

use serde::{Deserialize, Serialize};

/// How the router renders table paths as URLs and reads them back.
///
/// `Browser` tracks the path directly (`/services`), the way the history
/// API does; `Hash` keeps the path in the URL fragment (`/#/services`) so
/// the host page never changes. The mode is plain configuration: it affects
/// URL formatting and parsing only, never which routes resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// History-API-backed URL tracking (`/services`).
    #[default]
    Browser,
    /// Fragment-backed URL tracking (`/#/services`).
    Hash,
}

impl HistoryMode {
    /// Renders a table path as a URL in this mode.
    pub fn format_url(&self, path: &str) -> String {
        match self {
            Self::Browser => path.to_string(),
            Self::Hash => format!("/#{path}"),
        }
    }

    /// Extracts the table path from a URL in this mode.
    ///
    /// Query strings are dropped in both modes. In `Browser` mode the
    /// fragment is dropped too; in `Hash` mode the fragment *is* the path,
    /// and a URL without one means the root.
    pub fn parse_url<'a>(&self, url: &'a str) -> &'a str {
        let path = match self {
            Self::Browser => url.split(['?', '#']).next().unwrap_or(url),
            Self::Hash => match url.split_once('#') {
                Some((_, fragment)) => fragment.split('?').next().unwrap_or(fragment),
                None => "/",
            },
        };
        if path.is_empty() {
            "/"
        } else {
            path
        }
    }
}

/// In-process navigation history: a stack of visited paths and a cursor.
///
/// This is the provider behind [`Router`](crate::Router). It models what a
/// browser session does with its back/forward stack, minus the browser:
/// `push` visits a new path and discards any forward entries, `replace`
/// swaps the current one in place, and `back`/`forward` move the cursor
/// without growing the stack.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
    stack: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The path under the cursor, if any path has been visited.
    pub fn current(&self) -> Option<&str> {
        self.stack.get(self.cursor).map(String::as_str)
    }

    /// Visits a new path, truncating any forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        if !self.stack.is_empty() {
            self.stack.truncate(self.cursor + 1);
        }
        self.stack.push(path.into());
        self.cursor = self.stack.len() - 1;
    }

    /// Replaces the path under the cursor without growing the stack.
    ///
    /// On an empty history this is a plain visit.
    pub fn replace(&mut self, path: impl Into<String>) {
        if let Some(slot) = self.stack.get_mut(self.cursor) {
            *slot = path.into();
        } else {
            self.push(path);
        }
    }

    /// Moves the cursor one entry back, returning the path it lands on.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        self.current()
    }

    /// Moves the cursor one entry forward, returning the path it lands on.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        self.current()
    }

    /// Whether an entry exists behind the cursor.
    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    /// Whether an entry exists ahead of the cursor.
    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.stack.len()
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if nothing has been visited.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
