//! The calculator facade.
//!
//! Owns the operation registry and the history, evaluates triples and
//! applies history edits. Every call either succeeds completely or leaves
//! all state untouched.

use tracing::{debug, warn};

use super::evaluation::{CalcResult, Listing};
use super::history::History;
use super::operation::Registry;
use super::record::Calculation;
use crate::error::Result;

#[derive(Clone, Debug, Default)]
pub struct Calculator {
    registry: Registry,
    history: History,
    precision: Option<usize>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Round rendered numbers to `precision` decimals in [`Calculator::list`].
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.precision = precision;
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Evaluate `a symbol b` and record it on success.
    pub fn evaluate(&mut self, a: f64, symbol: &str, b: f64) -> CalcResult {
        match self.compute(a, symbol, b) {
            Ok(calculation) => {
                debug!(%calculation, "evaluated");
                let position = self.history.append(calculation.clone());
                CalcResult::Success {
                    calculation,
                    position,
                }
            }
            Err(err) => {
                warn!(a, symbol, b, error = %err, "evaluation failed");
                CalcResult::Error(err)
            }
        }
    }

    /// Re-evaluate `a symbol b` and store it at `position`.
    ///
    /// The position is checked before the operation, so an invalid index is
    /// reported even when the operation would fail too.
    pub fn update(&mut self, position: usize, a: f64, symbol: &str, b: f64) -> Result<Calculation> {
        self.history
            .check_position(position)
            .inspect_err(|err| warn!(position, error = %err, "update rejected"))?;

        let calculation = self.compute(a, symbol, b).inspect_err(|err| {
            warn!(position, a, symbol, b, error = %err, "update failed");
        })?;
        self.history.update_at(position, calculation.clone())?;
        Ok(calculation)
    }

    /// Delete the entry at `position`.
    pub fn delete(&mut self, position: usize) -> Result<Calculation> {
        self.history
            .delete_at(position)
            .inspect_err(|err| warn!(position, error = %err, "delete rejected"))
    }

    /// Remove every entry. Never fails.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Render every entry in position order.
    pub fn list(&self) -> Listing {
        if self.history.is_empty() {
            return Listing::Empty;
        }
        Listing::Entries(
            self.history
                .get_all()
                .iter()
                .map(|calculation| calculation.render(self.precision))
                .collect(),
        )
    }

    fn compute(&self, a: f64, symbol: &str, b: f64) -> Result<Calculation> {
        let operation = self.registry.lookup(symbol)?;
        let result = operation.apply(a, b)?;
        Ok(Calculation::new(a, operation.symbol(), b, result))
    }
}
