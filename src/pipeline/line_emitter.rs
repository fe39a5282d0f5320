//! Line-emitter stage: open each candidate file and push its lines
//! downstream, one record per line, in file order.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crate::types::LineRecord;

use super::channel::{StageReceiver, StageSender};
use super::context::PipelineContext;

pub fn spawn_line_emitter_thread(
    ctx: PipelineContext,
    cand_rx: StageReceiver<PathBuf>,
    line_tx: StageSender<LineRecord>,
) -> JoinHandle<()> {
    thread::spawn(move || line_emitter_loop(ctx, cand_rx, line_tx))
}

/// An open failure skips that file entirely; a read failure mid-file abandons
/// the remainder of that file only. Either way the failure is recorded and
/// the stage moves on to the next name.
fn line_emitter_loop(
    ctx: PipelineContext,
    cand_rx: StageReceiver<PathBuf>,
    line_tx: StageSender<LineRecord>,
) {
    while let Some(name) = cand_rx.recv() {
        let path = ctx.root.join(&name);
        match File::open(&path) {
            Ok(file) => match emit_lines(file, &name, &line_tx) {
                Ok(true) => {}
                // Downstream is gone; no point reading further.
                Ok(false) => break,
                Err(err) => ctx.record_skip(&path, err),
            },
            Err(err) => ctx.record_skip(&path, err),
        }
    }
    line_tx.finish();
}

/// Send every line of `file` in order, newline-delimited with the trailing
/// `\n` / `\r\n` stripped. Lines are byte-opaque: invalid UTF-8 is carried
/// through lossily rather than treated as an error. Returns `Ok(false)` when
/// the downstream receiver is gone.
fn emit_lines(file: File, name: &Path, line_tx: &StageSender<LineRecord>) -> io::Result<bool> {
    let mut reader = BufReader::new(file);
    let mut buf = Vec::with_capacity(256);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(true);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let record = LineRecord {
            file: name.to_path_buf(),
            line: String::from_utf8_lossy(&buf).into_owned(),
        };
        if !line_tx.send(record) {
            return Ok(false);
        }
    }
}
