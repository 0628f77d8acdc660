//! Fuzz target for path resolution.
//!
//! Tests that lookups against a small table handle arbitrary input
//! without panicking.

#![no_main]

use denta_router::{RouteEntry, RouteTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let table = RouteTable::new(vec![
        RouteEntry::new("/", "home", ()),
        RouteEntry::new("/contacts", "contacts", ()),
        RouteEntry::new("/doctor-account", "doctor-account", ()),
    ])
    .unwrap();

    // Try to interpret the input as a UTF-8 string
    if let Ok(s) = std::str::from_utf8(data) {
        // Resolution should never panic, hit or miss
        let _ = table.resolve_path(s);
        let _ = table.resolve_name(s);
    }

    // Also try with lossy conversion (includes invalid UTF-8 bytes as replacement chars)
    let lossy = String::from_utf8_lossy(data);
    let _ = table.resolve_path(&lossy);
    let _ = table.resolve_name(&lossy);
});
