//! histcalc command line.
//!
//! Usage:
//!     histcalc                 interactive menu
//!     histcalc eval 2 + 3      evaluate a single operation
//!     histcalc ops             list the available operations

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use histcalc::calculator::Calculator;
use histcalc::config::Config;
use histcalc::shell::{Painter, Shell, evaluate_once, write_operations};

/// Console calculator with an editable calculation history
#[derive(Parser)]
#[command(name = "histcalc")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.config/histcalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Never clear the screen
    #[arg(long, global = true)]
    no_clear: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a single operation, e.g. `eval 2 + 3` or `eval 30 sin`
    Eval {
        /// First operand
        #[arg(allow_hyphen_values = true)]
        a: f64,

        /// Operator symbol
        #[arg(allow_hyphen_values = true)]
        operator: String,

        /// Second operand, ignored by unary operators
        #[arg(allow_hyphen_values = true)]
        b: Option<f64>,
    },

    /// List the available operations
    Ops,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.no_color {
        config.color = false;
    }
    if cli.no_clear {
        config.clear_screen = false;
    }

    match cli.command {
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(config, stdin.lock(), io::stdout());
            shell.run()
        }
        Some(Commands::Eval { a, operator, b }) => cmd_eval(&config, a, &operator, b),
        Some(Commands::Ops) => {
            let calculator = Calculator::new();
            let painter = Painter::from_env(config.color);
            write_operations(&mut io::stdout(), calculator.registry(), &painter)
        }
    }
}

fn cmd_eval(config: &Config, a: f64, operator: &str, b: Option<f64>) -> Result<()> {
    let painter = Painter::from_env(config.color);
    let rendered = evaluate_once(config, a, operator, b)?;
    writeln!(io::stdout(), "{}", painter.success(&rendered))?;
    Ok(())
}
