//! repogen - addon repository index generator.
//!
//! Scans a release's target directory for addon folders, merges each
//! addon's `addon.xml` manifest into a single `addons.xml` document and
//! writes an `addons.xml.md5` checksum file alongside it.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;

pub use error::{RepoError, Result};
