//! Core library for Launchpad.
//!
//! This crate provides the domain models, the checklist progress engine, and
//! the document store for Launchpad, independent of any transport layer.
//!
//! # Usage
//!
//! ```no_run
//! use launchpad_core::db::Database;
//! use launchpad_core::models::*;
//!
//! let db = Database::open_default()?;
//! db.migrate()?;
//!
//! let projects = db.list_projects()?;
//! # Ok::<(), launchpad_core::Error>(())
//! ```

pub mod checklist;
pub mod db;
pub mod error;
pub mod models;

// Re-export commonly used types at crate root
pub use db::Database;
pub use error::{Error, Result};
