//! CLI argument parsing using clap.

use clap::{
    Parser, Subcommand,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::operation::{Operation, Step};

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Chainable arithmetic calculator
#[derive(Parser, Debug)]
#[command(
    name = "calcchain",
    version = env!("CARGO_PKG_VERSION"),
    about = "Chainable arithmetic calculator",
    long_about = "Run arithmetic primitives or chain them on a running value.",
    styles = clap_cargo_style(),
    after_help = "Examples:\n  calcchain compute add 15.5 7.2\n  calcchain chain --initial 10 add:5 multiply:2 subtract:3\n  calcchain --precision 5 chain --initial 3.14159265\n  calcchain --json compute divide 10 0"
)]
pub struct Cli {
    /// Path to custom settings.toml file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON envelopes instead of text (overrides display.json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Digits after the decimal point (overrides display.precision)
    #[arg(short, long, global = true, value_name = "DIGITS")]
    pub precision: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply one arithmetic primitive to two operands
    #[command(
        about = "Apply add, subtract, multiply or divide to two numbers",
        after_help = "Operations: add (+), subtract (sub, -), multiply (mul, *), divide (div, /)"
    )]
    Compute {
        /// Operation name or symbol
        op: Operation,

        /// Left operand
        #[arg(allow_negative_numbers = true)]
        a: f64,

        /// Right operand
        #[arg(allow_negative_numbers = true)]
        b: f64,
    },

    /// Apply a sequence of steps to a running value
    #[command(
        about = "Chain operations on a running value",
        after_help = "Steps are written op:operand, e.g. add:5 multiply:2 divide:-4.\nThe chain stops at the first failing step and reports the value before it."
    )]
    Chain {
        /// Starting value
        #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
        initial: f64,

        /// Steps applied in order
        #[arg(value_name = "STEP")]
        steps: Vec<Step>,
    },

    /// Run the documented usage walkthrough
    #[command(about = "Show chaining, primitives, error handling and formatting")]
    Demo,

    /// Initialize project
    #[command(about = "Create .calcchain/settings.toml with default settings")]
    Init {
        /// Force overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Show current configuration settings
    #[command(about = "Display active settings")]
    Config,
}
