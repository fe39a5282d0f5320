//! Stagegrep CLI: substring-search the current directory through a staged
//! concurrent pipeline.

use std::process;

use clap::Parser;
use stagegrep::engine::arg_parser::Cli;
use stagegrep::engine::handle_run;

fn main() -> anyhow::Result<()> {
    // Usage errors exit 1, not clap's default 2.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let _ = err.print();
        process::exit(1);
    });
    handle_run(&cli)
}
