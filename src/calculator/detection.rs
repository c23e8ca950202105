//! Splitting a typed line into an operation triple.
//!
//! Accepts `a op b` for binary operations and `a op` for unary ones
//! (`30 sin`, `5 !`, `5!`). Whether a second operand is read depends on the
//! operator being in the registry's unary set.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use super::operation::Registry;

lazy_static! {
    /// First operand, operator, and an optional second operand.
    /// The operator is either a word (`sin`) or one non-numeric character (`+`, `!`).
    static ref TRIPLE: Regex = Regex::new(
        r"^\s*(?P<a>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<op>[A-Za-z]+|[^\s\d.A-Za-z])\s*(?P<b>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)?\s*$"
    ).unwrap();
}

/// A parsed `(a, operator, b)` triple.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedInput {
    pub a: f64,
    pub operator: String,
    /// `0` for unary operators.
    pub b: f64,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Please enter an operation, e.g. `2 + 3` or `30 sin`")]
    Empty,
    #[error("Could not read `{0}` as an operation")]
    Malformed(String),
    #[error("Missing second operand for `{0}`")]
    MissingOperand(String),
}

/// Parse one line of user input.
///
/// Unknown operators are not rejected here; they parse as binary and are
/// reported by the calculator when evaluated.
pub fn parse_input(input: &str, registry: &Registry) -> Result<ParsedInput, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let caps = TRIPLE
        .captures(trimmed)
        .ok_or_else(|| ParseError::Malformed(trimmed.to_string()))?;

    let a = parse_number(&caps["a"], trimmed)?;
    let operator = caps["op"].to_lowercase();

    // Unary operators ignore anything after the symbol
    if registry.is_unary(&operator) {
        return Ok(ParsedInput { a, operator, b: 0.0 });
    }

    let b = match caps.name("b") {
        Some(b) => parse_number(b.as_str(), trimmed)?,
        None => return Err(ParseError::MissingOperand(operator)),
    };

    Ok(ParsedInput { a, operator, b })
}

/// Second operand for an already split triple, e.g. from command line arguments.
///
/// Unary operators default a missing `b` to `0`. Anything else needs one.
pub fn resolve_operand(
    registry: &Registry,
    operator: &str,
    b: Option<f64>,
) -> Result<f64, ParseError> {
    match b {
        Some(b) => Ok(b),
        None if registry.is_unary(operator) => Ok(0.0),
        None => Err(ParseError::MissingOperand(operator.to_string())),
    }
}

/// Parse a 1-based history position.
pub fn parse_position(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

fn parse_number(text: &str, input: &str) -> Result<f64, ParseError> {
    text.parse()
        .map_err(|_| ParseError::Malformed(input.to_string()))
}
