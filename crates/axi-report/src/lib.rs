//! axi-report: text tables and file output for solver snapshots.

pub mod table;
pub mod writer;

pub use table::{format_snapshot, format_summary};
pub use writer::SolutionWriter;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
