use clap::Parser;

use crate::types::SearchCriteria;

/// Concurrent staged substring search over the current directory's files.
#[derive(Clone, Parser)]
#[command(name = "stagegrep")]
#[command(about = "Search the current directory's files for a substring through a staged pipeline.")]
pub struct Cli {
    /// Capacity of each hand-off channel between stages (at least 1).
    #[arg(value_name = "BUFSIZE", value_parser = clap::value_parser!(u64).range(1..))]
    pub buffer_capacity: u64,

    /// Only search files strictly larger than this many bytes. -1 disables the filter.
    #[arg(value_name = "MINSIZE", allow_hyphen_values = true)]
    pub min_size: i64,

    /// Only search files owned by this uid. -1 disables the filter.
    #[arg(value_name = "UID", allow_hyphen_values = true)]
    pub uid: i64,

    /// Only search files owned by this gid. -1 disables the filter.
    #[arg(value_name = "GID", allow_hyphen_values = true)]
    pub gid: i64,

    /// Case-sensitive substring to search for.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Convert raw arguments into the pipeline's criteria. Negative filter
    /// values mean "no filter" and become `None` here; the sentinel never
    /// travels past this boundary.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            channel_capacity: self.buffer_capacity as usize,
            min_size: optional_size(self.min_size),
            uid: optional_id(self.uid),
            gid: optional_id(self.gid),
            pattern: self.pattern.clone(),
        }
    }
}

/// A negative size filter (the documented `-1`) disables it.
pub fn optional_size(raw: i64) -> Option<u64> {
    u64::try_from(raw).ok()
}

/// A negative id filter (the documented `-1`) disables it. Values beyond the
/// uid_t range cannot name a real owner and disable the filter too.
pub fn optional_id(raw: i64) -> Option<u32> {
    u32::try_from(raw).ok()
}
