//! Route entries: the path/name/view triples a table is built from.

/// A single route: a URL path, a symbolic name, and the view it maps to.
///
/// The view type `V` is opaque to the routing layer; entries carry it from
/// declaration to resolution without ever inspecting it. Entries are not
/// validated on creation — that happens when a [`RouteTable`] is built — so
/// declaring a table stays a flat literal list.
///
/// [`RouteTable`]: crate::RouteTable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<V> {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) view: V,
}

impl<V> RouteEntry<V> {
    /// Creates a new route entry.
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }

    /// The URL path this entry matches.
    ///
    /// Once the entry is part of a table, this is the normalized form
    /// (trailing slashes stripped).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The symbolic name used for programmatic navigation.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The view this route renders.
    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accessors() {
        let entry = RouteEntry::new("/contacts", "contacts", 7u8);

        assert_eq!(entry.path(), "/contacts");
        assert_eq!(entry.name(), "contacts");
        assert_eq!(*entry.view(), 7);
    }
}
