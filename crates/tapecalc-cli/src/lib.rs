//! tapecalc CLI library
//!
//! Terminal presentation layer for the [`tapecalc`] engine: key labels come
//! in as arguments or stdin lines, the display goes out after each press.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod runner;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, FormatArg, KeypadArgs, PressArgs, ReplArgs, TapeArgs,
};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Reporter};
pub use runner::{run_labels, split_labels, Press, Session, Transcript};
