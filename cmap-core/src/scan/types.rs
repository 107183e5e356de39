use std::collections::BTreeMap;
use std::fmt;

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimestampMs(pub i64);

impl fmt::Display for TimestampMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VbucketId(pub u32);

impl fmt::Display for VbucketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vb_{}", self.0)
    }
}

/// Compaction timestamps per vbucket.
///
/// Vbuckets iterate in ascending id order; the timestamps of each vbucket keep the
/// order in which they appeared in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompactionIndex {
    by_vbucket: BTreeMap<VbucketId, Vec<TimestampMs>>,
}

impl CompactionIndex {
    pub(crate) fn record(&mut self, vbucket: VbucketId, ts: TimestampMs) {
        self.by_vbucket.entry(vbucket).or_default().push(ts);
    }

    pub fn get(&self, vbucket: VbucketId) -> &[TimestampMs] {
        self.by_vbucket
            .get(&vbucket)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (VbucketId, &[TimestampMs])> {
        self.by_vbucket.iter().map(|(vb, ts)| (*vb, ts.as_slice()))
    }

    pub fn vbucket_count(&self) -> usize {
        self.by_vbucket.len()
    }

    pub fn event_count(&self) -> usize {
        self.by_vbucket.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_vbucket.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RebalanceEvents {
    pub starts: Vec<TimestampMs>,
    pub ends: Vec<TimestampMs>,
}

/// The smallest and largest timestamp seen across all recognised events.
///
/// An unresolved range (nothing observed yet) stands in for the `(+inf, 0)` starting
/// point: `first()` and `last()` return `None` until the first observation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    bounds: Option<(TimestampMs, TimestampMs)>,
}

impl TimeRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, ts: TimestampMs) {
        self.bounds = Some(match self.bounds {
            None => (ts, ts),
            Some((first, last)) => (first.min(ts), last.max(ts)),
        });
    }

    pub fn first(&self) -> Option<TimestampMs> {
        self.bounds.map(|(first, _)| first)
    }

    pub fn last(&self) -> Option<TimestampMs> {
        self.bounds.map(|(_, last)| last)
    }

    pub fn bounds(&self) -> Option<(TimestampMs, TimestampMs)> {
        self.bounds
    }

    pub fn is_resolved(&self) -> bool {
        self.bounds.is_some()
    }

    pub fn contains(&self, ts: TimestampMs) -> bool {
        self.bounds
            .is_some_and(|(first, last)| first <= ts && ts <= last)
    }
}

/// Line counters collected while scanning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: u64,
    pub recognized: u64,
    /// Recognised lines whose timestamp could not be extracted.
    pub malformed: u64,
}

/// Everything the renderer needs, handed over read-only once the scan is done.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    pub compactions: CompactionIndex,
    pub rebalances: RebalanceEvents,
    pub range: TimeRange,
    pub stats: ScanStats,
}
