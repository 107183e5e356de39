use crate::scan::types::VbucketId;

const ADMIN_MARKER: &str = "master";
const REBALANCE_START: &str = "Started rebalancing bucket";
const REBALANCE_END: &str = "Rebalance completed successfully";
const COMPACTION_KEYWORDS: [&str; 2] = ["maybe_compact_vbucket", "spawn_vbucket_compactor"];
const COMPACTION_EXCLUSIONS: [&str; 2] = ["from", "initial call"];
const COMPACTING: &str = "Compacting";

/// What a single log line means to the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    Skip,
    RebalanceStart,
    RebalanceEnd,
    /// `authoritative` lines carry a vbucket id and are drawn; the others only
    /// widen the time range.
    Compaction { authoritative: bool },
}

impl LineClass {
    pub fn is_recognized(self) -> bool {
        !matches!(self, LineClass::Skip)
    }
}

/// Classify a raw log line. The checks are ordered and the first match wins.
pub fn classify(line: &str) -> LineClass {
    if line.contains(ADMIN_MARKER) {
        return LineClass::Skip;
    }

    if line.contains(REBALANCE_START) {
        return LineClass::RebalanceStart;
    }

    if line.contains(REBALANCE_END) {
        return LineClass::RebalanceEnd;
    }

    let compaction_related = COMPACTION_KEYWORDS.iter().any(|k| line.contains(k))
        && !COMPACTION_EXCLUSIONS.iter().any(|k| line.contains(k));

    if compaction_related {
        return LineClass::Compaction {
            authoritative: line.contains(COMPACTING),
        };
    }

    LineClass::Skip
}

/// Pull the vbucket id out of the trailing token of a compaction line,
/// e.g. `<<"default/5">>` or `"/data/bucket/5"`.
///
/// Returns the offending token on failure.
pub fn parse_vbucket_id(line: &str) -> Result<VbucketId, String> {
    let token = line.split_whitespace().last().unwrap_or_default();

    let cleaned = token.replace(['<', '>'], "");
    let cleaned = cleaned.trim_matches(|c| c == '"' || c == '\'');
    let segment = cleaned.rsplit('/').next().unwrap_or_default();

    segment
        .parse::<u32>()
        .map(VbucketId)
        .map_err(|_| token.to_string())
}
