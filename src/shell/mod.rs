//! Interactive menu session.
//!
//! The only place that talks to the terminal. Reads menu choices and
//! operations, hands parsed triples to the [`Calculator`] and prints what
//! comes back.

mod menu;
mod style;

pub use menu::MenuChoice;
pub use style::Painter;

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::calculator::{
    Calculator, Listing, Registry, parse_input, parse_position, resolve_operand,
};
use crate::config::Config;

const INPUT_HINT: &str = "Enter operation (format: a + b or a sin): ";

/// A menu-driven calculator session over any reader and writer.
pub struct Shell<R, W> {
    calculator: Calculator,
    config: Config,
    painter: Painter,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        let calculator = Calculator::new().with_precision(config.precision);
        let painter = Painter::from_env(config.color);
        Self {
            calculator,
            config,
            painter,
            input,
            output,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Consume the shell and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user quits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!("session started");
        loop {
            if self.config.clear_screen {
                write!(self.output, "{}", style::CLEAR_SCREEN)?;
            }
            self.show_menu()?;

            let prompt = self.config.prompt.clone();
            let Some(line) = self.read_line(&prompt)? else {
                writeln!(self.output)?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let Some(choice) = MenuChoice::parse(&line) else {
                let msg = self.painter.error("Invalid choice!");
                writeln!(self.output, "{}", msg)?;
                continue;
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::Calculate => self.calculate()?,
                MenuChoice::ShowOperations => self.show_operations()?,
                MenuChoice::ShowHistory => self.show_history()?,
                MenuChoice::DeleteHistory => self.delete()?,
                MenuChoice::UpdateHistory => self.update()?,
                MenuChoice::ClearHistory => self.clear()?,
                MenuChoice::Credits => self.credits()?,
                MenuChoice::Quit => break,
            }

            if self.config.clear_screen && self.read_line("\nPress Enter to continue...")?.is_none() {
                break;
            }
        }

        writeln!(self.output, "Exiting program.")?;
        self.output.flush()?;
        info!(entries = self.calculator.len(), "session ended");
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        let heading = self.painter.heading("Menu:");
        writeln!(self.output, "\n{}", heading)?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        Ok(())
    }

    fn calculate(&mut self) -> Result<()> {
        let Some(line) = self.read_line(INPUT_HINT)? else {
            return Ok(());
        };
        let parsed = match parse_input(&line, self.calculator.registry()) {
            Ok(parsed) => parsed,
            Err(err) => return self.report_error(&err.to_string()),
        };

        let result = self
            .calculator
            .evaluate(parsed.a, &parsed.operator, parsed.b);
        match result.error() {
            None => {
                let value = crate::calculator::format_number(result.value(), self.config.precision);
                let msg = self.painter.success(&format!("Result: {}", value));
                writeln!(self.output, "{}", msg)?;
                Ok(())
            }
            Some(err) => self.report_error(&format!("Error: {}", err)),
        }
    }

    fn show_operations(&mut self) -> Result<()> {
        write_operations(&mut self.output, self.calculator.registry(), &self.painter)
    }

    fn show_history(&mut self) -> Result<()> {
        match self.calculator.list() {
            Listing::Empty => {
                let msg = self.painter.muted("No calculation history.");
                writeln!(self.output, "{}", msg)?;
            }
            listing => {
                for (position, entry) in listing.numbered() {
                    writeln!(self.output, "{}. {}", position, entry)?;
                }
            }
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        self.show_history()?;
        let Some(position) = self.read_position("Enter the index of the history to delete: ")? else {
            return Ok(());
        };

        match self.calculator.delete(position) {
            Ok(_) => {
                let msg = self.painter.success("Calculation history deleted.");
                writeln!(self.output, "{}", msg)?;
                Ok(())
            }
            Err(_) => self.report_error("Invalid index."),
        }
    }

    fn update(&mut self) -> Result<()> {
        self.show_history()?;
        let Some(position) = self.read_position("Enter the index of the history to update: ")? else {
            return Ok(());
        };
        if self.calculator.history().check_position(position).is_err() {
            return self.report_error("Invalid index.");
        }

        let Some(line) = self.read_line("Enter the new operation (format: a + b or a sin): ")? else {
            return Ok(());
        };
        let parsed = match parse_input(&line, self.calculator.registry()) {
            Ok(parsed) => parsed,
            Err(err) => return self.report_error(&err.to_string()),
        };

        match self
            .calculator
            .update(position, parsed.a, &parsed.operator, parsed.b)
        {
            Ok(_) => {
                let msg = self.painter.success("Calculation history updated.");
                writeln!(self.output, "{}", msg)?;
                Ok(())
            }
            Err(err) => self.report_error(&format!("Error: {}", err)),
        }
    }

    fn clear(&mut self) -> Result<()> {
        self.calculator.clear();
        let msg = self.painter.success("All calculation history cleared.");
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    fn credits(&mut self) -> Result<()> {
        let heading = self.painter.heading("Credits");
        writeln!(self.output, "\n{}", heading)?;
        writeln!(
            self.output,
            "{} v{}",
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(self.output, "{}", env!("CARGO_PKG_DESCRIPTION"))?;
        let license = self
            .painter
            .muted(&format!("Licensed under {}", env!("CARGO_PKG_LICENSE")));
        writeln!(self.output, "{}", license)?;
        Ok(())
    }

    fn report_error(&mut self, message: &str) -> Result<()> {
        let msg = self.painter.error(message);
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Read a position, reporting anything that is not a number.
    /// Returns `None` on end of input or invalid input.
    fn read_position(&mut self, prompt: &str) -> Result<Option<usize>> {
        let Some(line) = self.read_line(prompt)? else {
            return Ok(None);
        };
        match parse_position(&line) {
            Some(position) => Ok(Some(position)),
            None => {
                self.report_error("Invalid index.")?;
                Ok(None)
            }
        }
    }

    /// Print `prompt` and read one line. `None` means end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Evaluate a single operation outside of a session and render it.
///
/// Fails when a binary operator has no second operand or when the
/// calculator rejects the operation.
pub fn evaluate_once(config: &Config, a: f64, operator: &str, b: Option<f64>) -> Result<String> {
    let mut calculator = Calculator::new().with_precision(config.precision);
    let b = resolve_operand(calculator.registry(), operator, b)?;
    let calculation = calculator.evaluate(a, operator, b).into_result()?;
    Ok(calculation.render(config.precision))
}

/// Print the table of available operations.
pub fn write_operations(output: &mut impl Write, registry: &Registry, painter: &Painter) -> Result<()> {
    let (binary, unary): (Vec<_>, Vec<_>) = registry.operations().partition(|op| !op.is_unary());

    writeln!(output, "\n{}", painter.heading("Regular operations (a + b):"))?;
    for op in binary {
        writeln!(output, "{}\t{} ({})", op.symbol(), op.name(), op.usage())?;
    }

    writeln!(
        output,
        "\n{}",
        painter.heading("Special operations (a sin, the second operand is ignored):")
    )?;
    for op in unary {
        writeln!(output, "{}\t{} ({})", op.symbol(), op.name(), op.usage())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn plain_config() -> Config {
        Config {
            color: false,
            ..Config::default()
        }
    }

    fn run_session(input: &str) -> (String, Calculator) {
        let mut shell = Shell::new(plain_config(), Cursor::new(input.to_string()), Vec::new());
        shell.run().unwrap();
        let calculator = shell.calculator().clone();
        let output = String::from_utf8(shell.into_output()).unwrap();
        (output, calculator)
    }

    #[test]
    fn test_calculate_and_show_history() {
        let (output, calc) = run_session("1\n2 + 3\n1\n5!\n3\n8\n");
        assert!(output.contains("Result: 5"));
        assert!(output.contains("Result: 120"));
        assert!(output.contains("1. 2 + 3 = 5"));
        assert!(output.contains("2. 5! = 120"));
        assert!(output.ends_with("Exiting program.\n"));
        assert_eq!(calc.len(), 2);
    }

    #[test]
    fn test_errors_are_reported() {
        let (output, calc) = run_session("1\n5 / 0\n1\n1 ? 1\n1\nhello\n3\n8\n");
        assert!(output.contains("Error: Division by zero!"));
        assert!(output.contains("Error: Unknown operation: ?"));
        assert!(output.contains("Could not read `hello` as an operation"));
        assert!(output.contains("No calculation history."));
        assert!(calc.is_empty());
    }

    #[test]
    fn test_delete_and_update() {
        let input = "1\n2 + 3\n1\n4 * 4\n4\n1\n5\n1\n9 sqrt\n5\n7\n1 + 1\n3\n8\n";
        let (output, calc) = run_session(input);
        assert!(output.contains("Calculation history deleted."));
        assert!(output.contains("Calculation history updated."));
        assert!(output.contains("Invalid index."));
        assert!(output.contains("1. sqrt(9) = 3"));
        assert_eq!(calc.len(), 1);
    }

    #[test]
    fn test_clear_history() {
        let (output, calc) = run_session("1\n1 + 1\n6\n6\n3\n8\n");
        assert_eq!(output.matches("All calculation history cleared.").count(), 2);
        assert!(output.contains("No calculation history."));
        assert!(calc.is_empty());
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let (output, _) = run_session("42\n");
        assert!(output.contains("Invalid choice!"));
        assert!(output.ends_with("Exiting program.\n"));
    }

    #[test]
    fn test_operations_table() {
        let (output, _) = run_session("2\n8\n");
        assert!(output.contains("+\tAddition (a + b)"));
        assert!(output.contains("sin\tSine (sin(a°))"));
        assert!(output.contains("!\tFactorial (a!)"));
    }

    #[test]
    fn test_evaluate_once() {
        let config = plain_config();
        assert_eq!(evaluate_once(&config, 2.0, "+", Some(3.0)).unwrap(), "2 + 3 = 5");
        assert_eq!(evaluate_once(&config, 5.0, "!", None).unwrap(), "5! = 120");
        assert_eq!(evaluate_once(&config, 100.0, "log", None).unwrap(), "log(100) = 2");
    }

    #[test]
    fn test_evaluate_once_failures() {
        let config = plain_config();
        let err = evaluate_once(&config, 2.0, "+", None).unwrap_err();
        assert_eq!(err.to_string(), "Missing second operand for `+`");
        let err = evaluate_once(&config, 5.0, "/", Some(0.0)).unwrap_err();
        assert_eq!(err.to_string(), "Division by zero!");
        let err = evaluate_once(&config, 1.0, "?", Some(1.0)).unwrap_err();
        assert_eq!(err.to_string(), "Unknown operation: ?");
    }

    #[test]
    fn test_evaluate_once_precision() {
        let config = Config {
            precision: Some(2),
            ..plain_config()
        };
        assert_eq!(evaluate_once(&config, 1.0, "/", Some(3.0)).unwrap(), "1 / 3 = 0.33");
    }

    #[test]
    fn test_credits() {
        let (output, _) = run_session("7\nq\n");
        assert!(output.contains(env!("CARGO_PKG_NAME")));
        assert!(output.contains(env!("CARGO_PKG_VERSION")));
    }
}
