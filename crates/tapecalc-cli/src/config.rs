//! CLI configuration

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use tapecalc::core::history::History;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// `-q`: only errors reach stderr
    Quiet,
    /// No flags
    #[default]
    Normal,
    /// `-v`: per-batch log lines
    Verbose,
    /// `-vv`: per-token log lines
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// True for `-q`
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Default log filter when `RUST_LOG` is unset
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Colour only when stdout is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Resolves the choice against the current stdout
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Output format for transcripts
    pub format: OutputFormat,
    /// Maximum number of tape lines kept
    pub tape_capacity: usize,
    /// Print only the display after the last press
    pub final_only: bool,
    /// Print the tape after the run
    pub show_tape: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            format: OutputFormat::Text,
            tape_capacity: History::DEFAULT_MAX_ENTRIES,
            final_only: false,
            show_tape: false,
        }
    }
}

impl CliConfig {
    /// Configuration with every flag at its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set output format
    #[must_use]
    pub const fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set tape capacity
    #[must_use]
    pub const fn with_tape_capacity(mut self, tape_capacity: usize) -> Self {
        self.tape_capacity = tape_capacity;
        self
    }

    /// Set final-only output
    #[must_use]
    pub const fn with_final_only(mut self, final_only: bool) -> Self {
        self.final_only = final_only;
        self
    }

    /// Set tape printing
    #[must_use]
    pub const fn with_show_tape(mut self, show_tape: bool) -> Self {
        self.show_tape = show_tape;
        self
    }
}
