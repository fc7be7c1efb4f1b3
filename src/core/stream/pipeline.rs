//! Stream pipeline - orchestrates one tap run
//!
//! request → transform → emit, for a single stream. The record set is fetched
//! in one call; emission is a push loop that awaits each write, so a slow sink
//! holds back the next line instead of letting output pile up in memory.

use super::summary::SyncSummary;
use crate::adapters::agentz::AgentzClient;
use crate::adapters::traits::ReportSource;
use crate::config::TapConfig;
use crate::core::transform::RecordTransformer;
use crate::domain::{DateRange, RawRecord, Result, StreamName, TapError};
use std::time::Instant;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// One run of the tap for one stream
pub struct StreamPipeline<S> {
    source: S,
    stream: StreamName,
    range: DateRange,
    transformer: RecordTransformer,
}

impl StreamPipeline<AgentzClient> {
    /// Build the production pipeline from a validated config
    ///
    /// The date range's end is fixed here, once, for the whole run.
    ///
    /// # Errors
    ///
    /// Returns `TapError::Configuration` if the date range is inverted or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &TapConfig) -> Result<Self> {
        let range = config.date_range()?;
        let client = AgentzClient::new(config)?;
        Ok(Self::new(client, config.stream.clone(), range))
    }
}

impl<S: ReportSource> StreamPipeline<S> {
    /// Create a pipeline over any report source
    pub fn new(source: S, stream: StreamName, range: DateRange) -> Self {
        let transformer = RecordTransformer::new(&range);
        Self {
            source,
            stream,
            range,
            transformer,
        }
    }

    /// Fetch the report and write one RECORD line per record to `sink`
    ///
    /// Succeeds only once every line is written and the sink has flushed.
    ///
    /// # Errors
    ///
    /// - `TapError::Report` if the request fails; nothing is written
    /// - `TapError::Sink` on the first failed write or flush; nothing more is
    ///   written
    pub async fn run<W>(&self, sink: &mut W) -> Result<SyncSummary>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let started = Instant::now();
        crate::log_sync_start!(&self.stream, self.range.start_date(), self.range.end_date());

        let records = self.source.fetch_report(&self.range).await?;
        tracing::info!(
            stream = %self.stream,
            source = self.source.source_url(),
            count = records.len(),
            "Report fetched, emitting records"
        );

        let summary = self.emit(records, sink).await?;
        let summary = summary.with_duration(started.elapsed());

        crate::log_sync_complete!(&self.stream, summary.records_emitted, summary.duration);
        Ok(summary)
    }

    /// Write `records` in order, awaiting the sink after every line
    pub async fn emit<I, W>(&self, records: I, sink: &mut W) -> Result<SyncSummary>
    where
        I: IntoIterator<Item = RawRecord>,
        W: AsyncWrite + Unpin + ?Sized,
    {
        let mut summary = SyncSummary::new(self.stream.clone());

        for raw in records {
            let line = self.transformer.format_message(&self.stream, raw)?;
            sink.write_all(&line).await.map_err(|e| {
                tracing::error!(
                    error = %e,
                    written = summary.records_emitted,
                    "Output sink rejected a record"
                );
                TapError::Sink(e.to_string())
            })?;
            summary.record_line(line.len());
        }

        sink.flush()
            .await
            .map_err(|e| TapError::Sink(format!("flush failed: {e}")))?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedReport {
        body: Value,
        calls: AtomicUsize,
    }

    impl FixedReport {
        fn new(body: Value) -> Self {
            Self {
                body,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ReportSource for FixedReport {
        async fn fetch_report(&self, _range: &DateRange) -> Result<Vec<RawRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(crate::domain::records_from_body(self.body.clone())?)
        }

        fn source_url(&self) -> &str {
            "memory://fixed"
        }
    }

    struct FailingReport;

    #[async_trait]
    impl ReportSource for FailingReport {
        async fn fetch_report(&self, _range: &DateRange) -> Result<Vec<RawRecord>> {
            Err(ReportError::RequestFailed {
                status: 500,
                message: "internal".to_string(),
            }
            .into())
        }

        fn source_url(&self) -> &str {
            "memory://failing"
        }
    }

    fn range() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2020, 8, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_run_emits_one_line_per_record_in_order() {
        let source = FixedReport::new(json!([
            {"Seq": 1}, {"Seq": 2}, {"Seq": 3}
        ]));
        let pipeline = StreamPipeline::new(source, StreamName::default(), range());

        let mut sink: Vec<u8> = Vec::new();
        let summary = pipeline.run(&mut sink).await.unwrap();

        let text = String::from_utf8(sink).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(summary.records_emitted, 3);
        assert_eq!(summary.bytes_written, text.len() as u64);
        assert_eq!(lines.len(), 3);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(line["type"], "RECORD");
            assert_eq!(line["stream"], "AgentzSessions");
            assert_eq!(line["record"]["seq"], json!(i + 1));
            assert_eq!(line["record"]["date_updated"], "2024-05-17");
        }
        assert!(text.ends_with('\n'));
    }

    #[tokio::test]
    async fn test_run_fetches_exactly_once() {
        let pipeline = StreamPipeline::new(
            FixedReport::new(json!([{"A": 1}])),
            StreamName::default(),
            range(),
        );
        let mut sink: Vec<u8> = Vec::new();
        pipeline.run(&mut sink).await.unwrap();
        assert_eq!(pipeline.source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_empty_report_writes_nothing() {
        let pipeline =
            StreamPipeline::new(FixedReport::new(json!([])), StreamName::default(), range());
        let mut sink: Vec<u8> = Vec::new();
        let summary = pipeline.run(&mut sink).await.unwrap();
        assert_eq!(summary.records_emitted, 0);
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_request_failure_writes_nothing() {
        let pipeline = StreamPipeline::new(FailingReport, StreamName::default(), range());
        let mut sink: Vec<u8> = Vec::new();
        let result = pipeline.run(&mut sink).await;

        assert!(matches!(
            result,
            Err(TapError::Report(ReportError::RequestFailed { status: 500, .. }))
        ));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_body_writes_nothing() {
        let pipeline = StreamPipeline::new(
            FixedReport::new(json!([{"A": 1}, "oops"])),
            StreamName::default(),
            range(),
        );
        let mut sink: Vec<u8> = Vec::new();
        let result = pipeline.run(&mut sink).await;

        assert!(matches!(
            result,
            Err(TapError::Report(ReportError::InvalidResponse(_)))
        ));
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_custom_stream_name() {
        let pipeline = StreamPipeline::new(
            FixedReport::new(json!({"UserName": "solo"})),
            StreamName::new("Deployments").unwrap(),
            range(),
        );
        let mut sink: Vec<u8> = Vec::new();
        pipeline.run(&mut sink).await.unwrap();

        let line: Value = serde_json::from_slice(&sink).unwrap();
        assert_eq!(line["stream"], "Deployments");
        assert_eq!(line["record"]["user_name"], "solo");
    }
}
