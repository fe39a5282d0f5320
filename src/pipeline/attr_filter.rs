//! Attribute-filter stage: stat each name and forward the ones that pass
//! every configured predicate.

use std::fs;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use crate::engine::predicates::{FileAttrs, passes_attr_filters};

use super::channel::{StageReceiver, StageSender};
use super::context::PipelineContext;

pub fn spawn_attr_filter_thread(
    ctx: PipelineContext,
    name_rx: StageReceiver<PathBuf>,
    cand_tx: StageSender<PathBuf>,
) -> JoinHandle<()> {
    thread::spawn(move || attr_filter_loop(ctx, name_rx, cand_tx))
}

/// A stat failure drops that one name, nothing more; the stage itself only
/// stops at the end-of-stream marker, which it then forwards exactly once.
fn attr_filter_loop(
    ctx: PipelineContext,
    name_rx: StageReceiver<PathBuf>,
    cand_tx: StageSender<PathBuf>,
) {
    while let Some(name) = name_rx.recv() {
        let path = ctx.root.join(&name);
        match fs::metadata(&path) {
            Ok(meta) => {
                let attrs = FileAttrs::from_metadata(&meta);
                if passes_attr_filters(&attrs, &ctx.criteria) && !cand_tx.send(name) {
                    break;
                }
            }
            Err(err) => ctx.record_skip(&path, err),
        }
    }
    cand_tx.finish();
}
