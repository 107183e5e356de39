use clap::Parser;
use cmap_core::cli::{print_error, print_summary, run_timeline};
use cmap_core::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cmap",
    version,
    about = "cmap: vbucket compaction and rebalance timeline from a cluster log"
)]
struct Cli {
    /// Cluster log file to scan
    logfile: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    init_logging();
    tracing::debug!(logfile = %cli.logfile.display(), "starting");

    match run_timeline(&cli.logfile) {
        Ok(summary) => print_summary(&summary),
        Err(err) => {
            print_error(&err);
            std::process::exit(1);
        }
    }
}
