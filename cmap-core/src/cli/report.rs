use crate::cli::run::Summary;
use crate::render::RenderError;
use crate::scan::ScanError;
use owo_colors::OwoColorize;

pub fn print_summary(summary: &Summary) {
    println!(
        "{} {} compactions across {} vbuckets",
        "✔".green(),
        summary.compactions,
        summary.vbuckets
    );
    println!(
        "{} {} rebalance starts, {} rebalance ends",
        "✔".green(),
        summary.rebalance_starts,
        summary.rebalance_ends
    );
    println!(
        "{} {:.1}s of activity",
        "✔".green(),
        summary.span_ms as f64 / 1000.0
    );
    if summary.malformed_lines > 0 {
        println!(
            "{} {} recognised lines skipped (no usable timestamp)",
            "!".yellow(),
            summary.malformed_lines
        );
    }
    println!("{} wrote {}", "✔".green(), summary.output.display());
}

pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {err:#}", "error:".red().bold());
    if let Some(hint) = error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    if let Some(err) = err.downcast_ref::<ScanError>() {
        return match err {
            ScanError::Open { .. } => Some(
                "Check the path to the log file.\n\
                 \n\
                 Usage: cmap <logfile>",
            ),
            ScanError::InvalidVbucket { .. } => Some(
                "Compaction records are expected to end with the vbucket path,\n\
                 e.g. Compacting <<\"default/5\">>. The log format may have changed.",
            ),
            ScanError::Read { .. } => None,
        };
    }

    match err.downcast_ref::<RenderError>()? {
        RenderError::EmptyTimeRange => Some(
            "No line matched a rebalance or compaction pattern.\n\
             \n\
             Make sure this is the cluster debug log, e.g. ns_server.debug.log.",
        ),
        RenderError::DegenerateTimeRange { .. } => Some(
            "At least two distinct timestamps are needed to draw a time axis.",
        ),
        RenderError::Write { .. } => Some(
            "The timeline is written to the current directory; make sure it is writable.",
        ),
    }
}
