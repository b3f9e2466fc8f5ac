//! tapecalc: pocket calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! tapecalc press 5 + 3 =          # one display per key
//! tapecalc press --final-only 9/4= # just the last display
//! tapecalc repl                   # type keys, one batch per line
//! tapecalc keypad                 # show the button grid
//! ```

use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
use std::process::ExitCode;
use tapecalc::keypad::Keypad;
use tapecalc_cli::{
    logging, run_labels, split_labels, Cli, CliConfig, CliResult, Commands, KeypadArgs, PressArgs,
    Reporter, Session,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = cli.config();
    logging::init(config.verbosity);
    debug!(?config, "configuration resolved");

    let reporter = Reporter::new(config.color.should_color(), config.verbosity.is_quiet());

    match &cli.command {
        Commands::Press(args) => run_press(&config, &reporter, args),
        Commands::Repl(_) => run_repl(&config, &reporter),
        Commands::Keypad(args) => run_keypad(&reporter, args),
        Commands::Config(_) => run_config(&config),
    }
}

fn run_press(config: &CliConfig, reporter: &Reporter, args: &PressArgs) -> CliResult<()> {
    let labels = split_labels(args.labels.as_slice());
    let transcript = run_labels(&labels, config.tape_capacity)?;
    reporter.transcript(
        &transcript,
        config.format,
        config.final_only,
        config.show_tape,
    )
}

fn run_repl(config: &CliConfig, reporter: &Reporter) -> CliResult<()> {
    let mut session = Session::new(config.tape_capacity);
    let interactive = std::io::stdin().is_terminal() && !config.verbosity.is_quiet();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "tape" => {
                reporter.tape(&session.tape())?;
                continue;
            }
            _ => {}
        }

        let fed = session.feed(&split_labels(&[line.as_str()])).map(|_| ());
        match fed {
            Ok(()) => reporter.display(session.display(), session.is_error())?,
            Err(e) => reporter.warning(&e.to_string()),
        }
    }

    if config.show_tape {
        reporter.tape(&session.tape())?;
    }
    Ok(())
}

fn run_keypad(reporter: &Reporter, args: &KeypadArgs) -> CliResult<()> {
    reporter.keypad(&Keypad::new(), args.ids)
}

fn run_config(config: &CliConfig) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
