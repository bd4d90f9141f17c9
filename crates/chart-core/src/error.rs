// File: crates/chart-core/src/error.rs
// Summary: Error type for chart model operations.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("series must contain at least one value")]
    EmptySeries,
    #[error("unknown theme '{0}'")]
    UnknownTheme(String),
}

pub type ChartResult<T> = Result<T, ChartError>;
