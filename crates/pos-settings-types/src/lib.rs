//! Shared types, error types, and the storage adapter trait for the POS
//! settings engine.
//!
//! The engine crate and every storage adapter depend on this crate, so the
//! adapter implementations do not need to pull in the engine itself.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod error;
pub mod prelude;
pub mod resolution;
pub mod store_adapter;
pub mod types;
pub mod value;

// vim: ts=4
