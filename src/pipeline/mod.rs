//! Pipeline components: bounded stage channels, the five stage workers, and
//! the orchestrator that wires and joins them.

pub mod attr_filter;
pub mod channel;
pub mod context;
pub mod line_emitter;
pub mod line_filter;
pub mod orchestrator;
pub mod sink;
pub mod source;

pub use attr_filter::spawn_attr_filter_thread;
pub use channel::{Message, StageReceiver, StageSender, stage_channel};
pub use context::{
    PipelineChannels, PipelineContext, PipelineHandles, SkippedPaths, create_pipeline_channels,
};
pub use line_emitter::spawn_line_emitter_thread;
pub use line_filter::spawn_line_filter_thread;
pub use orchestrator::{run_pipeline, run_search};
pub use sink::spawn_sink_thread;
pub use source::spawn_source_thread;

/// Hand-off channel capacity when a lib caller doesn't pick one. Small keeps
/// memory bounded; a full channel blocks its producer, so capacity only
/// trades throughput, never correctness. The CLI always sets its own.
pub const DEFAULT_CHANNEL_CAP: usize = 64;
