//! Calculator module for evaluating operations and keeping their history.
//!
//! This module provides functionality to:
//! - Look up operations by symbol and evaluate them
//! - Record successful calculations in an editable, ordered history
//! - Split typed input into `(a, operator, b)` triples

mod detection;
mod engine;
mod evaluation;
mod history;
mod operation;
mod record;

pub use detection::{ParseError, ParsedInput, parse_input, parse_position, resolve_operand};
pub use engine::Calculator;
pub use evaluation::{CalcResult, Listing};
pub use history::History;
pub use operation::{Notation, Operation, Registry};
pub use record::{Calculation, format_number};
