//! Sync summary
//!
//! Returned by a successful run. A failed run has no summary: the only thing
//! a caller observes is the error.

use crate::domain::StreamName;
use std::time::Duration;

/// Summary of one completed sync
#[derive(Debug, Clone)]
pub struct SyncSummary {
    /// Stream the records were emitted under
    pub stream: StreamName,

    /// Number of RECORD messages written
    pub records_emitted: usize,

    /// Total bytes written to the sink, newlines included
    pub bytes_written: u64,

    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl SyncSummary {
    /// Create an empty summary for `stream`
    pub fn new(stream: StreamName) -> Self {
        Self {
            stream,
            records_emitted: 0,
            bytes_written: 0,
            duration: Duration::from_secs(0),
        }
    }

    /// Count one written line of `len` bytes
    pub fn record_line(&mut self, len: usize) {
        self.records_emitted += 1;
        self.bytes_written += len as u64;
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Records per second, or zero for an instant run
    pub fn throughput(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.records_emitted as f64 / secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_summary_is_empty() {
        let summary = SyncSummary::new(StreamName::default());
        assert_eq!(summary.records_emitted, 0);
        assert_eq!(summary.bytes_written, 0);
        assert_eq!(summary.throughput(), 0.0);
    }

    #[test]
    fn test_record_line_accumulates() {
        let mut summary = SyncSummary::new(StreamName::default());
        summary.record_line(10);
        summary.record_line(32);
        assert_eq!(summary.records_emitted, 2);
        assert_eq!(summary.bytes_written, 42);
    }

    #[test]
    fn test_throughput() {
        let mut summary = SyncSummary::new(StreamName::default());
        for _ in 0..10 {
            summary.record_line(1);
        }
        let summary = summary.with_duration(Duration::from_secs(2));
        assert_eq!(summary.throughput(), 5.0);
    }
}
