//! A console calculator with an editable history of past calculations.

pub mod calculator;
pub mod config;
pub mod error;
pub mod shell;

pub use calculator::{CalcResult, Calculation, Calculator, Listing};
pub use config::Config;
pub use error::CalcError;
