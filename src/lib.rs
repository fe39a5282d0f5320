//! Stagegrep: concurrent staged substring search over one directory's files.
//!
//! Five fixed stages, one thread each, wired by bounded channels: enumerate
//! the directory, filter files by attributes, read lines, match the pattern,
//! print. A full channel blocks its producer and an empty one blocks its
//! consumer, so memory stays bounded no matter how lopsided the stages are.

pub mod engine;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use std::io::Write;
use std::path::Path;

use log::debug;

/// Result alias used by the public stagegrep API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: search `root`'s immediate regular files for
/// `criteria.pattern`, writing one `"<file>: <line>"` row per match to `out`.
///
/// Blocks until every stage has observed the end-of-stream marker, then
/// returns the totals and hands `out` back. Per-item I/O failures (stat,
/// open, read) are logged, counted in [`SearchSummary::skipped`], and never
/// fatal; partial results are always written. The CLI passes `"."` and
/// stdout; tests pass a temp dir and a `Vec<u8>`.
pub fn search_dir<W>(root: &Path, criteria: &SearchCriteria, out: W) -> Result<(SearchSummary, W)>
where
    W: Write + Send + 'static,
{
    debug!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_uppercase(),
        criteria
    );
    pipeline::run_search(root, criteria, out)
}
