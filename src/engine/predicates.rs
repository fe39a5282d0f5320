//! File-attribute predicates: which stat'd files stay in the pipeline.

use std::fs::Metadata;

use crate::types::SearchCriteria;

/// The attributes the filter stage looks at, lifted out of [`Metadata`] so
/// the decision logic is pure and testable without a live filesystem.
#[derive(Clone, Copy, Debug)]
pub struct FileAttrs {
    pub size: u64,
    pub uid: u32,
    pub gid: u32,
}

impl FileAttrs {
    #[cfg(unix)]
    pub fn from_metadata(meta: &Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;
        FileAttrs {
            size: meta.len(),
            uid: meta.uid(),
            gid: meta.gid(),
        }
    }

    /// Off unix there are no uid/gid to read; a configured id filter then
    /// never matches and the file is dropped.
    #[cfg(not(unix))]
    pub fn from_metadata(meta: &Metadata) -> Self {
        FileAttrs {
            size: meta.len(),
            uid: u32::MAX,
            gid: u32::MAX,
        }
    }
}

/// True iff every configured predicate holds. Unset filters always pass, so
/// rerunning against unchanged attributes always yields the same decision.
pub fn passes_attr_filters(attrs: &FileAttrs, criteria: &SearchCriteria) -> bool {
    size_exceeds(attrs.size, criteria.min_size)
        && id_matches(attrs.uid, criteria.uid)
        && id_matches(attrs.gid, criteria.gid)
}

/// Strictly greater: a file of exactly `min` bytes is excluded.
fn size_exceeds(size: u64, min: Option<u64>) -> bool {
    min.is_none_or(|m| size > m)
}

fn id_matches(id: u32, wanted: Option<u32>) -> bool {
    wanted.is_none_or(|w| id == w)
}
