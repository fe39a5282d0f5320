//! Source stage: enumerate the root's immediate entries and push regular
//! file names downstream.

use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use walkdir::WalkDir;

use super::channel::StageSender;
use super::context::PipelineContext;

pub fn spawn_source_thread(
    ctx: PipelineContext,
    name_tx: StageSender<PathBuf>,
) -> JoinHandle<()> {
    thread::spawn(move || source_loop(ctx, name_tx))
}

/// Emit each regular file's bare name in enumeration order (platform-defined,
/// not sorted), then the end-of-stream marker. Directories, symlinks, and
/// specials never enter the pipeline. A failed listing (e.g. unreadable root)
/// is recorded and the stage still finishes cleanly, having emitted zero
/// names.
fn source_loop(ctx: PipelineContext, name_tx: StageSender<PathBuf>) {
    // min/max depth 1: the entries themselves, not the root, not children.
    for entry in WalkDir::new(&ctx.root).min_depth(1).max_depth(1) {
        match entry {
            Ok(e) if e.file_type().is_file() => {
                if !name_tx.send(PathBuf::from(e.file_name())) {
                    break;
                }
            }
            Ok(_) => {}
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| ctx.root.clone());
                ctx.record_skip(&path, err);
            }
        }
    }
    name_tx.finish();
}
