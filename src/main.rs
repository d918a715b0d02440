mod cli;
mod commands;
mod config;
mod dedup;
mod error;
mod export;
mod folder;
mod import;
mod logging;
mod output;
mod store;
mod vocabulary;

use clap::Parser;
use error::ErrorFormatter;

fn main() {
    let cli = cli::Cli::parse();
    let verbose = cli.verbose > 0;
    logging::init(cli.verbose);

    if let Err(err) = commands::dispatch(cli) {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("{}", ErrorFormatter::new(verbose).format(&err));
        std::process::exit(1);
    }
}
