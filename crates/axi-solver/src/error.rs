use axi_core::CoreError;
use thiserror::Error;

pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: &'static str },
}
