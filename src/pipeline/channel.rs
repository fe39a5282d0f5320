//! Bounded hand-off channel between stages: FIFO, blocking both ways, with an
//! in-band end-of-stream marker.

use crossbeam_channel::{Receiver, Sender, bounded};

/// One element on a stage channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message<T> {
    /// A payload travelling down the pipeline.
    Item(T),
    /// End of stream. Sent exactly once, after the last payload.
    Done,
}

/// Create a stage channel holding at most `cap` elements. A full channel
/// blocks `send` and an empty one blocks `recv`; capacity is fixed for the
/// channel's lifetime.
pub fn stage_channel<T>(cap: usize) -> (StageSender<T>, StageReceiver<T>) {
    let (tx, rx) = bounded(cap);
    (StageSender { tx }, StageReceiver { rx })
}

/// Producing end, owned by exactly one upstream stage. Emitting the
/// end-of-stream marker consumes the sender ([`StageSender::finish`]), so no
/// payload can follow the marker.
pub struct StageSender<T> {
    tx: Sender<Message<T>>,
}

impl<T> StageSender<T> {
    /// Block until there is room, then enqueue `item`. Returns `false` when
    /// the consuming side is gone; producers stop on that instead of wedging
    /// the pipeline.
    pub fn send(&self, item: T) -> bool {
        self.tx.send(Message::Item(item)).is_ok()
    }

    /// Emit the end-of-stream marker and give up the sender.
    pub fn finish(self) {
        let _ = self.tx.send(Message::Done);
    }

    /// Elements queued right now. Moves under the caller's feet; meaningful
    /// for tests and diagnostics only.
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }

    /// True while the channel holds `cap` elements.
    pub fn is_full(&self) -> bool {
        self.tx.is_full()
    }
}

/// Consuming end, owned by exactly one downstream stage.
pub struct StageReceiver<T> {
    rx: Receiver<Message<T>>,
}

impl<T> StageReceiver<T> {
    /// Block until an element is available. `None` once the end-of-stream
    /// marker arrives, or when the producing side vanished without sending
    /// one (a panicked upstream must not wedge its consumer).
    pub fn recv(&self) -> Option<T> {
        match self.rx.recv() {
            Ok(Message::Item(item)) => Some(item),
            Ok(Message::Done) | Err(_) => None,
        }
    }
}
