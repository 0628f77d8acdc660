//! Fuzz target for route table construction.
//!
//! Tests that validation of arbitrary route declarations either builds a
//! table or returns a typed error, and never panics.

#![no_main]

use arbitrary::Arbitrary;
use denta_router::{RouteEntry, RouteTable};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Declaration {
    path: String,
    name: String,
}

fuzz_target!(|declarations: Vec<Declaration>| {
    let entries: Vec<RouteEntry<()>> = declarations
        .into_iter()
        .map(|d| RouteEntry::new(d.path, d.name, ()))
        .collect();

    if let Ok(table) = RouteTable::new(entries) {
        // A table that built must serve every entry it holds
        for entry in table.entries() {
            assert!(table.resolve_path(entry.path()).is_ok());
            assert!(table.resolve_name(entry.name()).is_ok());
        }
    }
});
