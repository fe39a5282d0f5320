//! Shared pipeline state: the context handed to every stage, the channel
//! bundle, and the join handles the orchestrator waits on.

use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use log::warn;

use super::channel::{StageReceiver, StageSender, stage_channel};
use crate::types::{LineRecord, SearchCriteria};

/// Per-item failures recorded by the stages: (path, reason).
pub type SkippedPaths = Arc<Mutex<Vec<(PathBuf, String)>>>;

/// Read-shared state cloned into every stage thread.
#[derive(Clone)]
pub struct PipelineContext {
    /// Directory being searched. Stages join bare file names onto this.
    pub root: PathBuf,
    pub criteria: Arc<SearchCriteria>,
    /// Bumped once per forwarded match; read by the orchestrator after join.
    pub match_count: Arc<AtomicUsize>,
    pub skipped: SkippedPaths,
}

impl PipelineContext {
    pub fn new(root: &Path, criteria: &SearchCriteria) -> Self {
        PipelineContext {
            root: root.to_path_buf(),
            criteria: Arc::new(criteria.clone()),
            match_count: Arc::new(AtomicUsize::new(0)),
            skipped: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record one per-item failure: warn immediately, remember it for the
    /// end-of-run summary. The item is dropped; the stage keeps going.
    pub fn record_skip(&self, path: &Path, reason: impl Display) {
        let reason = reason.to_string();
        warn!("skipping {}: {}", path.display(), reason);
        self.skipped.lock().unwrap().push((path.to_path_buf(), reason));
    }
}

/// The four hand-off channels:
/// Source → AttributeFilter → LineEmitter → LineFilter → Sink.
/// Each sender is owned by exactly one stage, each receiver by the next.
pub struct PipelineChannels {
    pub name_tx: StageSender<PathBuf>,
    pub name_rx: StageReceiver<PathBuf>,
    pub cand_tx: StageSender<PathBuf>,
    pub cand_rx: StageReceiver<PathBuf>,
    pub line_tx: StageSender<LineRecord>,
    pub line_rx: StageReceiver<LineRecord>,
    pub out_tx: StageSender<String>,
    pub out_rx: StageReceiver<String>,
}

/// All four channels share one capacity, so a slow stage backpressures its
/// producer instead of buffering without bound.
pub fn create_pipeline_channels(cap: usize) -> PipelineChannels {
    let (name_tx, name_rx) = stage_channel(cap);
    let (cand_tx, cand_rx) = stage_channel(cap);
    let (line_tx, line_rx) = stage_channel(cap);
    let (out_tx, out_rx) = stage_channel(cap);
    PipelineChannels {
        name_tx,
        name_rx,
        cand_tx,
        cand_rx,
        line_tx,
        line_rx,
        out_tx,
        out_rx,
    }
}

/// Handles returned by [`run_pipeline`](super::run_pipeline): join in
/// pipeline order, then read the shared counters. The sink hands its writer
/// back at join time.
pub struct PipelineHandles<W> {
    pub source: JoinHandle<()>,
    pub attr_filter: JoinHandle<()>,
    pub line_emitter: JoinHandle<()>,
    pub line_filter: JoinHandle<()>,
    pub sink: JoinHandle<io::Result<W>>,
    pub match_count: Arc<AtomicUsize>,
    pub skipped: SkippedPaths,
}
