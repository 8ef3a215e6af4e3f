//! Error types for buffer construction

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("the drawn shape has no points")]
    EmptyShape,

    #[error("buffer radius must be >= 0 meters, got {meters}")]
    NegativeRadius { meters: f64 },

    #[error("segment counts must be positive, got joint={joint} cap={cap}")]
    InvalidSegments { joint: usize, cap: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
