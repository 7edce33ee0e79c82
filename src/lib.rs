//! Core library for Herodex.
//!
//! This crate provides the domain models and database operations for tracking
//! heroes, their powers, and the hero/power associations between them,
//! independent of any transport layer (HTTP, MCP, etc.).
//!
//! # Usage
//!
//! ```no_run
//! use herodex::db::Database;
//! use herodex::models::*;
//!
//! let db = Database::open_default()?;
//! db.migrate()?;
//!
//! let heroes = db.get_all_heroes()?;
//! # Ok::<(), herodex::Error>(())
//! ```

pub mod db;
pub mod error;
pub mod models;

// Re-export commonly used types at crate root
pub use db::Database;
pub use error::{Error, Result};
