//! A single evaluated calculation and how it is rendered.

use std::fmt;

use super::operation::{Notation, Operation};

/// One successful calculation stored in the history.
///
/// A calculation never changes after construction. Updating a history entry
/// replaces it with a new `Calculation`.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    a: f64,
    operator: String,
    b: f64,
    result: f64,
}

impl Calculation {
    pub fn new(a: f64, operator: impl Into<String>, b: f64, result: f64) -> Self {
        Self {
            a,
            operator: operator.into(),
            b,
            result,
        }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Second operand. Stored even for unary operations, which ignore it.
    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// Render the calculation, e.g. `2 + 3 = 5`, `sin(30°) = 0.5` or `5! = 120`.
    ///
    /// With `precision` set, numbers are rounded to that many decimals and
    /// trailing zeros are dropped.
    pub fn render(&self, precision: Option<usize>) -> String {
        let a = format_number(self.a, precision);
        let op = &self.operator;

        if op == Operation::Divide.symbol() && self.b == 0.0 {
            return format!("{} / 0 = Error (Division by zero!)", a);
        }

        let result = format_number(self.result, precision);
        let notation = Operation::ALL
            .iter()
            .find(|candidate| candidate.symbol() == op)
            .map_or(Notation::Infix, |candidate| candidate.notation());

        match notation {
            Notation::Degrees => format!("{}({}°) = {}", op, a, result),
            Notation::Prefix => format!("{}({}) = {}", op, a, result),
            Notation::Postfix => format!("{}{} = {}", a, op, result),
            Notation::Infix => {
                let b = format_number(self.b, precision);
                format!("{} {} {} = {}", a, op, b, result)
            }
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Format a number for display.
///
/// Without a precision the shortest representation that round-trips is
/// used (`5`, `0.5`, `-3.25`).
pub fn format_number(value: f64, precision: Option<usize>) -> String {
    if value.is_nan() {
        return "Not a Number".to_string();
    }
    if value.is_infinite() {
        let msg = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return msg.to_string();
    }

    let formatted = match precision {
        Some(precision) => {
            let fixed = format!("{:.*}", precision, value);
            if fixed.contains('.') {
                fixed
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            } else {
                fixed
            }
        }
        None => format!("{}", value),
    };

    // Rounding can leave a negative zero behind
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_rendering() {
        let calc = Calculation::new(2.0, "+", 3.0, 5.0);
        assert_eq!(calc.to_string(), "2 + 3 = 5");

        let calc = Calculation::new(7.5, "%", 2.0, 1.5);
        assert_eq!(calc.to_string(), "7.5 % 2 = 1.5");
    }

    #[test]
    fn test_unary_rendering() {
        assert_eq!(
            Calculation::new(30.0, "sin", 0.0, 0.5).to_string(),
            "sin(30°) = 0.5"
        );
        assert_eq!(
            Calculation::new(100.0, "log", 9.0, 2.0).to_string(),
            "log(100) = 2"
        );
        assert_eq!(
            Calculation::new(-27.0, "cbrt", 0.0, -3.0).to_string(),
            "cbrt(-27) = -3"
        );
        assert_eq!(
            Calculation::new(5.0, "!", 0.0, 120.0).to_string(),
            "5! = 120"
        );
    }

    #[test]
    fn test_division_by_zero_rendering() {
        let calc = Calculation::new(5.0, "/", 0.0, 0.0);
        assert_eq!(calc.to_string(), "5 / 0 = Error (Division by zero!)");

        let calc = Calculation::new(5.0, "/", 2.0, 2.5);
        assert_eq!(calc.to_string(), "5 / 2 = 2.5");
    }

    #[test]
    fn test_unregistered_operator_renders_infix() {
        let calc = Calculation::new(1.0, "?", 2.0, 3.0);
        assert_eq!(calc.to_string(), "1 ? 2 = 3");
    }

    #[test]
    fn test_precision() {
        let calc = Calculation::new(1.0, "/", 3.0, 1.0 / 3.0);
        assert_eq!(calc.render(Some(4)), "1 / 3 = 0.3333");
        assert_eq!(calc.render(Some(0)), "1 / 3 = 0");
        assert_eq!(format_number(2.50, Some(3)), "2.5");
        assert_eq!(format_number(-0.0001, Some(2)), "0");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_number(f64::NAN, None), "Not a Number");
        assert_eq!(format_number(f64::INFINITY, None), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, Some(2)), "-Infinity");
    }
}
