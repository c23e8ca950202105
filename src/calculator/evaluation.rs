//! Outcomes returned by the calculator to its caller.

use super::record::Calculation;
use crate::error::CalcError;

/// Result of evaluating one `(a, operator, b)` triple.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// The calculation succeeded and was recorded.
    Success {
        /// The stored calculation.
        calculation: Calculation,
        /// 1-based history position the calculation was stored at.
        position: usize,
    },
    /// Nothing was recorded.
    Error(CalcError),
}

impl CalcResult {
    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The numeric result surfaced to the caller. Failures surface as `0`.
    pub fn value(&self) -> f64 {
        match self {
            Self::Success { calculation, .. } => calculation.result(),
            Self::Error(_) => 0.0,
        }
    }

    pub fn calculation(&self) -> Option<&Calculation> {
        match self {
            Self::Success { calculation, .. } => Some(calculation),
            Self::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&CalcError> {
        match self {
            Self::Success { .. } => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Convert into a plain `Result`, dropping the recorded position.
    pub fn into_result(self) -> Result<Calculation, CalcError> {
        match self {
            Self::Success { calculation, .. } => Ok(calculation),
            Self::Error(err) => Err(err),
        }
    }
}

/// The rendered history.
///
/// An empty history is reported as [`Listing::Empty`] so callers can tell
/// "nothing to show" apart from a list they should print.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Listing {
    Empty,
    /// Rendered entries, in position order.
    Entries(Vec<String>),
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Pair every entry with its 1-based position.
    pub fn numbered(&self) -> Vec<(usize, &str)> {
        match self {
            Self::Empty => Vec::new(),
            Self::Entries(entries) => entries
                .iter()
                .enumerate()
                .map(|(i, entry)| (i + 1, entry.as_str()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let result = CalcResult::Success {
            calculation: Calculation::new(2.0, "+", 3.0, 5.0),
            position: 1,
        };
        assert!(result.is_success());
        assert_eq!(result.value(), 5.0);
        assert!(result.error().is_none());
        assert_eq!(result.into_result().unwrap().result(), 5.0);
    }

    #[test]
    fn test_error_surfaces_zero() {
        let result = CalcResult::Error(CalcError::DivisionByZero);
        assert!(!result.is_success());
        assert_eq!(result.value(), 0.0);
        assert!(result.calculation().is_none());
        assert_eq!(result.error(), Some(&CalcError::DivisionByZero));
    }

    #[test]
    fn test_numbered_listing() {
        let listing = Listing::Entries(vec!["1 + 1 = 2".into(), "5! = 120".into()]);
        assert_eq!(listing.numbered(), vec![(1, "1 + 1 = 2"), (2, "5! = 120")]);
        assert!(Listing::Empty.numbered().is_empty());
        assert!(Listing::Empty.is_empty());
    }
}
