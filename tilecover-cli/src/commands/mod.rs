//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`cover`] - Enumerate the tiles covering a bounding box
//! - [`locate`] - Find the tile addressing a single coordinate
//! - [`tiles`] - Resolve a standards-based request against a catalog

pub mod common;
pub mod cover;
pub mod locate;
pub mod tiles;
