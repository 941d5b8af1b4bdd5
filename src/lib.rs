//! Launchpad server: the HTTP surface over the core checklist engine and
//! store. The dashboard UI is a separate client of this API.

pub mod api;

pub use launchpad_core::{Database, Error};
