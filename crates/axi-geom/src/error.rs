use thiserror::Error;

pub type GeomResult<T> = Result<T, GeomError>;

#[derive(Error, Debug)]
pub enum GeomError {
    #[error("Invalid geometry dimension: {what}")]
    InvalidDimension { what: &'static str },
}
