//! Line-filter stage: substring match, output formatting, match counting.

use std::sync::atomic::Ordering;
use std::thread::{self, JoinHandle};

use crate::types::LineRecord;

use super::channel::{StageReceiver, StageSender};
use super::context::PipelineContext;

pub fn spawn_line_filter_thread(
    ctx: PipelineContext,
    line_rx: StageReceiver<LineRecord>,
    out_tx: StageSender<String>,
) -> JoinHandle<()> {
    thread::spawn(move || line_filter_loop(ctx, line_rx, out_tx))
}

/// Case-sensitive containment; non-matches are dropped silently. The counter
/// is bumped only after a successful send, so it always equals the number of
/// lines the sink received.
fn line_filter_loop(
    ctx: PipelineContext,
    line_rx: StageReceiver<LineRecord>,
    out_tx: StageSender<String>,
) {
    while let Some(record) = line_rx.recv() {
        if record.line.contains(&ctx.criteria.pattern) {
            if !out_tx.send(format_match(&record)) {
                break;
            }
            ctx.match_count.fetch_add(1, Ordering::Relaxed);
        }
    }
    out_tx.finish();
}

/// `"<filename>: <line>"`.
pub fn format_match(record: &LineRecord) -> String {
    format!("{}: {}", record.file.display(), record.line)
}
