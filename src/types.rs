//! Public types for the search API and pipeline.

use std::path::PathBuf;

use crate::pipeline::DEFAULT_CHANNEL_CAP;

/// Immutable search configuration, read-shared by every stage.
///
/// Built once from process input (or by a lib caller), wrapped in an `Arc`,
/// and never mutated afterward. `None` on a filter field means "no filter";
/// the CLI's `-1` sentinel is converted at the argument boundary and never
/// travels further.
#[derive(Clone, Debug)]
pub struct SearchCriteria {
    /// Capacity of each hand-off channel between stages. Must be at least 1.
    pub channel_capacity: usize,
    /// Keep only files strictly larger than this many bytes.
    pub min_size: Option<u64>,
    /// Keep only files owned by this uid.
    pub uid: Option<u32>,
    /// Keep only files owned by this gid.
    pub gid: Option<u32>,
    /// Case-sensitive substring to look for.
    pub pattern: String,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        SearchCriteria {
            channel_capacity: DEFAULT_CHANNEL_CAP,
            min_size: None,
            uid: None,
            gid: None,
            pattern: String::new(),
        }
    }
}

/// One line read from a candidate file, tagged with the file it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineRecord {
    /// Bare file name within the searched directory (no directory components).
    pub file: PathBuf,
    /// Line content without the trailing newline.
    pub line: String,
}

/// Totals reported once the pipeline has drained.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchSummary {
    /// Lines that contained the pattern. Equals the number of lines the sink
    /// actually wrote.
    pub match_count: usize,
    /// Paths dropped because of per-item I/O errors (stat, open, read).
    pub skipped: usize,
}
