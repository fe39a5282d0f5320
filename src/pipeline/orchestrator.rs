//! Orchestrator: wire the channels, start one worker per stage, join them
//! all, and report the totals.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::Ordering;

use anyhow::Result;
use log::warn;

use crate::types::{SearchCriteria, SearchSummary};

use super::context::{PipelineContext, PipelineHandles, SkippedPaths, create_pipeline_channels};
use super::{attr_filter, line_emitter, line_filter, sink, source};

/// Start the five-stage pipeline over `root`. Returns join handles and the
/// shared counters; the caller joins when it wants the run to be over. Each
/// stage exits only after the end-of-stream marker has passed through it.
pub fn run_pipeline<W>(root: &Path, criteria: &SearchCriteria, out: W) -> PipelineHandles<W>
where
    W: Write + Send + 'static,
{
    let ctx = PipelineContext::new(root, criteria);
    let ch = create_pipeline_channels(ctx.criteria.channel_capacity);

    let source = source::spawn_source_thread(ctx.clone(), ch.name_tx);
    let attr_filter = attr_filter::spawn_attr_filter_thread(ctx.clone(), ch.name_rx, ch.cand_tx);
    let line_emitter =
        line_emitter::spawn_line_emitter_thread(ctx.clone(), ch.cand_rx, ch.line_tx);
    let line_filter = line_filter::spawn_line_filter_thread(ctx.clone(), ch.line_rx, ch.out_tx);
    let sink = sink::spawn_sink_thread(ch.out_rx, out);

    PipelineHandles {
        source,
        attr_filter,
        line_emitter,
        line_filter,
        sink,
        match_count: ctx.match_count,
        skipped: ctx.skipped,
    }
}

/// Run the pipeline to completion: join every stage, then read the match
/// counter (safe only after join) and summarize skipped paths.
pub fn run_search<W>(root: &Path, criteria: &SearchCriteria, out: W) -> Result<(SearchSummary, W)>
where
    W: Write + Send + 'static,
{
    let handles = run_pipeline(root, criteria, out);

    handles
        .source
        .join()
        .map_err(|_| anyhow::anyhow!("source stage panicked"))?;
    handles
        .attr_filter
        .join()
        .map_err(|_| anyhow::anyhow!("attribute-filter stage panicked"))?;
    handles
        .line_emitter
        .join()
        .map_err(|_| anyhow::anyhow!("line-emitter stage panicked"))?;
    handles
        .line_filter
        .join()
        .map_err(|_| anyhow::anyhow!("line-filter stage panicked"))?;
    let out = handles
        .sink
        .join()
        .map_err(|_| anyhow::anyhow!("sink stage panicked"))??;

    let match_count = handles.match_count.load(Ordering::Relaxed);
    let skipped = report_skipped(&handles.skipped);
    Ok((SearchSummary { match_count, skipped }, out))
}

/// Post-join summary; each failure was already warned about as it happened.
fn report_skipped(skipped: &SkippedPaths) -> usize {
    let skipped = skipped.lock().unwrap();
    if !skipped.is_empty() {
        warn!("skipped {} path(s) due to I/O errors", skipped.len());
    }
    skipped.len()
}
