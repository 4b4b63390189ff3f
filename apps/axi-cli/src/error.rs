//! Error type for the command-line front end.

use std::path::PathBuf;

/// Wraps errors from the backend crates behind one interface for the CLI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case error: {0}")]
    Case(String),

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Case(err.to_string())
    }
}

impl From<axi_geom::GeomError> for AppError {
    fn from(err: axi_geom::GeomError) -> Self {
        AppError::Geometry(err.to_string())
    }
}

impl From<axi_solver::SolverError> for AppError {
    fn from(err: axi_solver::SolverError) -> Self {
        AppError::Solver(err.to_string())
    }
}

impl From<axi_report::ReportError> for AppError {
    fn from(err: axi_report::ReportError) -> Self {
        AppError::Report(err.to_string())
    }
}
