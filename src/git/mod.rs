//! Git integration module
//!
//! Thin wrappers around the `git` command-line tool for resolving refs,
//! finding merge bases and listing tree diffs.

mod diff;
mod repository;

// Keep the full git API public even where main only needs part of it
#[allow(unused_imports)]
pub use diff::{ChangeType, DiffEntry};
#[allow(unused_imports)]
pub use repository::{GitRepo, MainlineRef, RefSource};
