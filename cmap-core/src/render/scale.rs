use crate::render::error::RenderError;
use crate::scan::{TimeRange, TimestampMs};

/// Linear map from the observed time range onto `[0, width]`.
///
/// Only constructible for a range with `first < last`, so `scale` never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    first: TimestampMs,
    last: TimestampMs,
    width: f64,
}

impl TimeScale {
    pub fn new(range: &TimeRange, width: f64) -> Result<Self, RenderError> {
        let (first, last) = range.bounds().ok_or(RenderError::EmptyTimeRange)?;
        if first == last {
            return Err(RenderError::DegenerateTimeRange { at: first });
        }

        Ok(Self { first, last, width })
    }

    pub fn scale(&self, ts: TimestampMs) -> f64 {
        let offset = (ts.0 - self.first.0) as f64;
        let span = (self.last.0 - self.first.0) as f64;
        (self.width * offset / span).round()
    }
}
