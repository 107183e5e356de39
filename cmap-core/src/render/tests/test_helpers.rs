use crate::scan::{ScanOutcome, TimestampMs, VbucketId};

pub(crate) const T0: i64 = 1_136_214_245_000;

/// Build an outcome the way the scanner would, without going through text.
#[derive(Default)]
pub(crate) struct OutcomeBuilder {
    outcome: ScanOutcome,
}

impl OutcomeBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn compaction(mut self, vbucket: u32, offset_ms: i64) -> Self {
        let ts = TimestampMs(T0 + offset_ms);
        self.outcome.compactions.record(VbucketId(vbucket), ts);
        self.outcome.range.observe(ts);
        self
    }

    pub(crate) fn start(mut self, offset_ms: i64) -> Self {
        let ts = TimestampMs(T0 + offset_ms);
        self.outcome.rebalances.starts.push(ts);
        self.outcome.range.observe(ts);
        self
    }

    pub(crate) fn end(mut self, offset_ms: i64) -> Self {
        let ts = TimestampMs(T0 + offset_ms);
        self.outcome.rebalances.ends.push(ts);
        self.outcome.range.observe(ts);
        self
    }

    /// Widen the range without recording an event, like a spawn announcement.
    pub(crate) fn observe(mut self, offset_ms: i64) -> Self {
        self.outcome.range.observe(TimestampMs(T0 + offset_ms));
        self
    }

    pub(crate) fn build(self) -> ScanOutcome {
        self.outcome
    }
}
