use crate::column::ColumnName;
use thiserror::Error;

/// All errors generated in `daily-ta`.
#[derive(Error, Debug)]
pub enum TaError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("PriceTable does not contain column: {0}")]
    MissingColumn(ColumnName),

    #[error("column {name} holds {actual} values, expected {expected} values")]
    ColumnKind {
        name: ColumnName,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("column {name} has {actual} rows, PriceTable has {expected} rows")]
    ColumnLength {
        name: ColumnName,
        expected: usize,
        actual: usize,
    },

    #[error("percent change from a zero base value")]
    DivisionByZero,

    #[error("decimal arithmetic overflow")]
    Overflow,

    #[error("Deserialising JSON price records error: {0}")]
    Deserialise(#[from] serde_json::Error),
}

impl TaError {
    /// Construct a [`TaError::InvalidArgument`] for a zero window or horizon length.
    pub(crate) fn zero_length(argument: &'static str) -> Self {
        TaError::InvalidArgument(format!("{argument} must be at least 1"))
    }
}
