//! CLI command handler: arguments to criteria, one search over the current
//! directory, closing summary lines.

use std::io;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use log::debug;

use crate::engine::arg_parser::Cli;
use crate::search_dir;
use crate::utils::setup_logging;

/// Run one search over the current working directory. Match lines stream to
/// stdout as the pipeline produces them; the elapsed-time and match-count
/// lines are printed after every stage has drained.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let criteria = cli.criteria();
    debug!(
        "searching for {:?} (capacity {})",
        criteria.pattern, criteria.channel_capacity
    );

    let start = Instant::now();
    let (summary, _stdout) = search_dir(Path::new("."), &criteria, io::stdout())?;

    println!("Elapsed: {} ms", start.elapsed().as_millis());
    println!("Total matches: {}", summary.match_count);
    Ok(())
}
