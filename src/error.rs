//! Errors reported by the calculator core.

use thiserror::Error;

/// A recoverable failure of a single calculator call.
///
/// None of these are fatal: the call that produced one leaves the history
/// and the operation registry exactly as they were.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    /// The operator symbol is not in the registry.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
    /// `/` was asked to divide by zero.
    #[error("Division by zero!")]
    DivisionByZero,
    /// A 1-based history position outside `1..=len`.
    #[error("Invalid index {position} (history has {len} entries)")]
    IndexOutOfRange { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, CalcError>;
