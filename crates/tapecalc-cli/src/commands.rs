//! CLI command definitions using clap

use crate::config::{CliConfig, ColorChoice, Verbosity};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tapecalc::core::history::History;

/// tapecalc: a pocket calculator on the command line
#[derive(Parser, Debug)]
#[command(name = "tapecalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Press keys and print the display after each one
    Press(PressArgs),

    /// Read keys from stdin, one batch per line
    Repl(ReplArgs),

    /// Show the keypad layout
    Keypad(KeypadArgs),

    /// Show the effective configuration as JSON
    Config(ConfigArgs),
}

/// Tape options shared by `press` and `repl`
#[derive(Args, Debug, Clone)]
pub struct TapeArgs {
    /// Maximum number of tape lines kept
    #[arg(long, default_value_t = History::DEFAULT_MAX_ENTRIES)]
    pub tape_capacity: usize,

    /// Print the tape after the run
    #[arg(long)]
    pub show_tape: bool,
}

/// Arguments for the press command
#[derive(Parser, Debug)]
pub struct PressArgs {
    /// Key labels, e.g. `5 + 3 =` or `5+3=` (0-9 . + - * / = C)
    #[arg(required = true, num_args = 1..)]
    pub labels: Vec<String>,

    /// Only print the display after the last key
    #[arg(long)]
    pub final_only: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: FormatArg,

    /// Tape options
    #[command(flatten)]
    pub tape: TapeArgs,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Tape options
    #[command(flatten)]
    pub tape: TapeArgs,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Include button identifiers
    #[arg(long)]
    pub ids: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Tape options
    #[command(flatten)]
    pub tape: TapeArgs,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// One display per line
    #[default]
    Text,
    /// JSON transcript
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color choice argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

impl Cli {
    /// Builds the effective configuration from global flags and the subcommand
    #[must_use]
    pub fn config(&self) -> CliConfig {
        let base = CliConfig::new()
            .with_verbosity(Verbosity::from_flags(self.quiet, self.verbose))
            .with_color(self.color.into());

        match &self.command {
            Commands::Press(args) => base
                .with_format(args.format.into())
                .with_final_only(args.final_only)
                .with_tape_capacity(args.tape.tape_capacity)
                .with_show_tape(args.tape.show_tape),
            Commands::Repl(ReplArgs { tape }) | Commands::Config(ConfigArgs { tape }) => base
                .with_tape_capacity(tape.tape_capacity)
                .with_show_tape(tape.show_tape),
            Commands::Keypad(_) => base,
        }
    }
}
