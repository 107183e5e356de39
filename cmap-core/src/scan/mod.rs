//! Log Scanning Pipeline
//!
//! This module reads a cluster log file and pulls out the three kinds of events the
//! timeline cares about:
//! - **Rebalance start**: a bucket rebalance began
//! - **Rebalance end**: a rebalance completed successfully
//! - **Compaction**: a single vbucket was compacted
//!
//! Lines are read one at a time. Each line is classified exactly once against an ordered
//! list of textual patterns (first match wins), and recognised lines have their timestamp
//! pulled out of the second comma-separated field. Anything that does not match is dropped
//! on the floor without complaint.
//!
//! Compaction-related lines always widen the observed time range, but only the
//! authoritative `Compacting` records land in the per-vbucket index.
//!
//! The overall data processing architecture is:
//!
//! file
//! classify
//! LineClass
//! LogScanner
//! ScanOutcome
//!

mod classify;
mod error;
mod scanner;
mod timestamp;
mod types;

#[cfg(test)]
mod tests;

pub use classify::{LineClass, classify, parse_vbucket_id};
pub use error::ScanError;
pub use scanner::{LogScanner, scan_file, scan_reader};
pub use timestamp::{TimestampCache, parse_timestamp};
pub use types::*;
