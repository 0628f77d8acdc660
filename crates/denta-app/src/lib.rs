//! # Denta App
//!
//! The Denta dental-clinic patient portal shell: the portal's view
//! inventory, its declared route table, and the persisted application
//! configuration. The binary in `main.rs` wires these together at startup.
//!
//! ## Modules
//!
//! - [`views`] - The portal's renderable pages
//! - [`routes`] - Route declarations and router construction
//! - [`config`] - Configuration persistence

#![forbid(unsafe_code)]

pub mod config;
pub mod routes;
pub mod views;
