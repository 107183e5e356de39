use crate::cli::constants::OUTPUT_FILE;
use crate::render::TimelineRenderer;
use crate::scan::{ScanOutcome, scan_file};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub compactions: usize,
    pub vbuckets: usize,
    pub rebalance_starts: usize,
    pub rebalance_ends: usize,
    pub malformed_lines: u64,
    pub span_ms: i64,
}

impl Summary {
    fn new(output: &Path, outcome: &ScanOutcome) -> Self {
        Self {
            output: output.to_path_buf(),
            compactions: outcome.compactions.event_count(),
            vbuckets: outcome.compactions.vbucket_count(),
            rebalance_starts: outcome.rebalances.starts.len(),
            rebalance_ends: outcome.rebalances.ends.len(),
            malformed_lines: outcome.stats.malformed,
            span_ms: outcome
                .range
                .bounds()
                .map(|(first, last)| last.0 - first.0)
                .unwrap_or(0),
        }
    }
}

/// Scan `logfile` and write the timeline to `compaction.svg` in the working directory.
pub fn run_timeline(logfile: &Path) -> Result<Summary> {
    render_timeline(logfile, Path::new(OUTPUT_FILE))
}

/// Scan `logfile` and write the timeline to `output`.
///
/// Every fatal condition is detected before `output` is opened, so a failed run
/// leaves nothing behind.
pub fn render_timeline(logfile: &Path, output: &Path) -> Result<Summary> {
    let outcome = scan_file(logfile)?;

    let renderer = TimelineRenderer::default();
    let document = renderer.render(&outcome)?;
    renderer.save(&document, output)?;

    Ok(Summary::new(output, &outcome))
}
