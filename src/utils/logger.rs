use std::io::Write;

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};

/// Wire up env_logger: warnings only from dependencies, info (debug with
/// `verbose`) from this crate. Everything goes to stderr, so diagnostics
/// never mix with match output on stdout.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Warn => {
                    format!("[{} {}] {}", name.cyan(), "WARN".yellow(), record.args())
                }
                Level::Error => {
                    format!("[{} {}] {}", name.cyan(), "ERROR".red(), record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}
