//! Purpose: Stateless helpers for JSON-shaped application data.
//! Exports: `api` (public surface), `core` (implementation modules), `logging`.
//! Role: Library crate used by data-access and request-handling code.
//! Invariants: Helpers hold no global state; dependencies live on `api::Utility`.
//! Invariants: String helpers never fail; guards and phone parsing return typed errors.
pub mod api;
pub mod core;
pub mod logging;

pub use api::{Error, ErrorKind, Utility, UtilityOptions};
