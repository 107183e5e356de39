use crate::scan::TimestampMs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    // Time range
    #[error("no rebalance or compaction events were recognised; nothing to draw")]
    EmptyTimeRange,

    #[error("all recognised events happened at the same instant ({at}); the time axis has no width")]
    DegenerateTimeRange { at: TimestampMs },

    // IO
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
