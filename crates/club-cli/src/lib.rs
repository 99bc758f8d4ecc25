//! # club-cli
//!
//! The `club-analytics` command: compute weekly deltas, read stored weeks,
//! print badge metadata and apply migrations.

pub mod cli;
pub mod handler;

pub use cli::{Cli, Command};
