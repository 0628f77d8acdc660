//! # Denta Router
//!
//! Route table and history-aware navigation for the Denta patient portal.
//!
//! This crate implements the table-and-navigation core of a single-page
//! application router: a validated, immutable collection of
//! path/name/view routes, an in-process back/forward history, and the
//! navigation handle that ties the two together. Views are opaque to this
//! layer — the table carries a generic `V` from declaration to resolution
//! without ever looking at it, so rendering stays entirely the host's
//! concern.
//!
//! ## Usage
//!
//! ```
//! use denta_router::{HistoryMode, RouteEntry, Router, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     RouteEntry::new("/", "home", "Home"),
//!     RouteEntry::new("/contacts", "contacts", "Contacts"),
//! ])?;
//!
//! let router = Router::new(table, HistoryMode::Browser);
//! assert_eq!(router.current().unwrap().name(), "home");
//!
//! router.push("/contacts")?;
//! assert_eq!(router.current().unwrap().view(), &"Contacts");
//! # Ok::<(), denta_router::RouterError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod error;
mod history;
mod router;
mod table;

pub use entry::RouteEntry;
pub use error::{Result, RouterError};
pub use history::{HistoryMode, MemoryHistory};
pub use router::Router;
pub use table::RouteTable;
