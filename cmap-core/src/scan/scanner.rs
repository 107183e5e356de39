use crate::scan::classify::{LineClass, classify, parse_vbucket_id};
use crate::scan::error::ScanError;
use crate::scan::timestamp::TimestampCache;
use crate::scan::types::{CompactionIndex, RebalanceEvents, ScanOutcome, ScanStats, TimeRange};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Accumulates events line by line. Consumed by [`LogScanner::finish`].
#[derive(Debug, Default)]
pub struct LogScanner {
    compactions: CompactionIndex,
    rebalances: RebalanceEvents,
    range: TimeRange,
    stats: ScanStats,
    cache: TimestampCache,
}

impl LogScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line. `line_no` is 1-based and only used for diagnostics.
    pub fn push_line(&mut self, line_no: u64, line: &str) -> Result<(), ScanError> {
        self.stats.lines += 1;

        let class = classify(line);
        if !class.is_recognized() {
            return Ok(());
        }

        // A broken vbucket id is fatal even when the timestamp is broken too.
        let vbucket = match class {
            LineClass::Compaction {
                authoritative: true,
            } => Some(
                parse_vbucket_id(line)
                    .map_err(|token| ScanError::InvalidVbucket { line: line_no, token })?,
            ),
            _ => None,
        };

        let Some(ts) = self.cache.get(line) else {
            self.stats.malformed += 1;
            tracing::debug!(line = line_no, ?class, "skipping line without a usable timestamp");
            return Ok(());
        };

        self.stats.recognized += 1;
        self.range.observe(ts);

        match class {
            LineClass::RebalanceStart => self.rebalances.starts.push(ts),
            LineClass::RebalanceEnd => self.rebalances.ends.push(ts),
            LineClass::Compaction { .. } | LineClass::Skip => {}
        }

        if let Some(vbucket) = vbucket {
            self.compactions.record(vbucket, ts);
        }

        Ok(())
    }

    pub fn finish(self) -> ScanOutcome {
        tracing::info!(
            lines = self.stats.lines,
            recognized = self.stats.recognized,
            malformed = self.stats.malformed,
            compactions = self.compactions.event_count(),
            vbuckets = self.compactions.vbucket_count(),
            rebalance_starts = self.rebalances.starts.len(),
            rebalance_ends = self.rebalances.ends.len(),
            cache_hits = self.cache.hits(),
            "log scan finished"
        );

        ScanOutcome {
            compactions: self.compactions,
            rebalances: self.rebalances,
            range: self.range,
            stats: self.stats,
        }
    }
}

/// Scan every line of `reader`. `origin` names the source in error messages.
///
/// Invalid UTF-8 is replaced rather than rejected; these logs are not always clean.
pub fn scan_reader<R: BufRead>(mut reader: R, origin: &Path) -> Result<ScanOutcome, ScanError> {
    let mut scanner = LogScanner::new();
    let mut buf = Vec::new();
    let mut line_no = 0u64;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| ScanError::read(origin, e))?;
        if read == 0 {
            break;
        }

        line_no += 1;
        let line = String::from_utf8_lossy(&buf);
        scanner.push_line(line_no, line.trim_end_matches(['\n', '\r']))?;
    }

    Ok(scanner.finish())
}

/// Open `path` and scan it to completion. The file is closed before this returns.
pub fn scan_file(path: &Path) -> Result<ScanOutcome, ScanError> {
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
    tracing::debug!(path = %path.display(), "scanning log file");

    scan_reader(BufReader::new(file), path)
}
