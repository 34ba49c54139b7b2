//! `themecss`: render a global styles tree from the command line.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;

use cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match cli::run(&args) {
        Ok(text) => {
            println!("{}", text);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Installs a stderr subscriber; warnings are shown by default.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
