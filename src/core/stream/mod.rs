//! Stream orchestration and run summaries

pub mod pipeline;
pub mod summary;

pub use pipeline::StreamPipeline;
pub use summary::SyncSummary;
