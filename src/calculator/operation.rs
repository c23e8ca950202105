//! The operation registry.
//!
//! Maps operator symbols (`+`, `sin`, `!`, ...) to the rule that evaluates
//! them. The set of operations is closed: it is fixed when the registry is
//! built and never changes during a session.

use std::collections::HashMap;

use crate::error::{CalcError, Result};

/// How an operation is written when a calculation is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notation {
    /// `a op b`
    Infix,
    /// `op(a°)`, the operand is an angle in degrees.
    Degrees,
    /// `op(a)`
    Prefix,
    /// `a!`
    Postfix,
}

/// A single operation the calculator knows how to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulus,
    Sin,
    Cos,
    Tan,
    Log,
    SquareRoot,
    CubeRoot,
    Factorial,
}

impl Operation {
    /// Every operation, in the order they are listed to the user.
    pub const ALL: [Operation; 13] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Modulus,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
        Self::SquareRoot,
        Self::CubeRoot,
        Self::Factorial,
    ];

    /// The symbol the user types for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Modulus => "%",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::SquareRoot => "sqrt",
            Self::CubeRoot => "cbrt",
            Self::Factorial => "!",
        }
    }

    /// Human readable name, used in the operation table.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Power => "Power",
            Self::Modulus => "Modulus",
            Self::Sin => "Sine",
            Self::Cos => "Cosine",
            Self::Tan => "Tangent",
            Self::Log => "Logarithm base 10",
            Self::SquareRoot => "Square root",
            Self::CubeRoot => "Cube root",
            Self::Factorial => "Factorial",
        }
    }

    pub fn notation(self) -> Notation {
        match self {
            Self::Sin | Self::Cos | Self::Tan => Notation::Degrees,
            Self::Log | Self::SquareRoot | Self::CubeRoot => Notation::Prefix,
            Self::Factorial => Notation::Postfix,
            _ => Notation::Infix,
        }
    }

    /// Unary operations only look at their first operand.
    pub fn is_unary(self) -> bool {
        self.notation() != Notation::Infix
    }

    /// Example of how the operation is written, e.g. `a + b` or `sin(a°)`.
    pub fn usage(self) -> String {
        let op = self.symbol();
        match self.notation() {
            Notation::Infix => format!("a {} b", op),
            Notation::Degrees => format!("{}(a°)", op),
            Notation::Prefix => format!("{}(a)", op),
            Notation::Postfix => format!("a{}", op),
        }
    }

    /// Evaluate the operation. Unary operations ignore `b`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        let value = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
            Self::Power => a.powf(b),
            // Rust's `%` on floats is the C `fmod` remainder
            Self::Modulus => a % b,
            Self::Sin => a.to_radians().sin(),
            Self::Cos => a.to_radians().cos(),
            Self::Tan => a.to_radians().tan(),
            Self::Log => a.log10(),
            Self::SquareRoot => a.sqrt(),
            Self::CubeRoot => a.cbrt(),
            Self::Factorial => factorial(a),
        };
        Ok(value)
    }
}

/// Largest `n` whose factorial fits in an `f64`.
const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// Iterative factorial.
///
/// Negative inputs yield `0` rather than an error. Fractional inputs are
/// truncated towards zero first. Results beyond `170!` overflow to infinity.
fn factorial(a: f64) -> f64 {
    if a.is_nan() {
        return f64::NAN;
    }
    if a < 0.0 {
        return 0.0;
    }
    let n = a.trunc();
    if n > MAX_FINITE_FACTORIAL {
        return f64::INFINITY;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    result
}

/// Lookup table from operator symbol to [`Operation`].
#[derive(Clone, Debug)]
pub struct Registry {
    operations: HashMap<&'static str, Operation>,
}

impl Registry {
    pub fn new() -> Self {
        let operations = Operation::ALL
            .iter()
            .map(|&op| (op.symbol(), op))
            .collect();
        Self { operations }
    }

    /// Find the operation registered under `symbol`.
    pub fn lookup(&self, symbol: &str) -> Result<Operation> {
        self.operations
            .get(symbol)
            .copied()
            .ok_or_else(|| CalcError::UnknownOperation(symbol.to_string()))
    }

    /// Whether `symbol` names a registered unary operation.
    pub fn is_unary(&self, symbol: &str) -> bool {
        self.lookup(symbol).is_ok_and(Operation::is_unary)
    }

    /// All registered operations in display order.
    pub fn operations(&self) -> impl Iterator<Item = Operation> {
        Operation::ALL.iter().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
