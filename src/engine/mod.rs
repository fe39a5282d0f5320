//! Engine module: CLI surface and predicate evaluation.

pub mod arg_parser;
pub mod handlers;
pub mod predicates;

// Re-export commonly used items
pub use arg_parser::{Cli, optional_id, optional_size};
pub use handlers::handle_run;
pub use predicates::{FileAttrs, passes_attr_filters};
