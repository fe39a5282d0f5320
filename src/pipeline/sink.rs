//! Sink stage: write matches to the output in arrival order.

use std::io::{self, Write};
use std::thread::{self, JoinHandle};

use super::channel::StageReceiver;

/// Drain formatted matches into `out`, flushing per line so matches appear as
/// they happen rather than when the run ends. The writer is handed back at
/// join time so callers (tests in particular) can inspect what was written.
pub fn spawn_sink_thread<W>(out_rx: StageReceiver<String>, mut out: W) -> JoinHandle<io::Result<W>>
where
    W: Write + Send + 'static,
{
    thread::spawn(move || {
        while let Some(line) = out_rx.recv() {
            writeln!(out, "{line}")?;
            out.flush()?;
        }
        Ok(out)
    })
}
