//! # Tablebook Console Library
//!
//! The front desk of the restaurant: a line-oriented prompt over the
//! `tablebook-core` engine.
//!
//! ## Module Organization
//! ```text
//! tablebook_console/
//! ├── lib.rs          ◄─── You are here (flags, logging, run loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (restaurant + config)
//! │   └── config.rs   ◄─── Configuration from TABLEBOOK_* variables
//! ├── commands/
//! │   ├── mod.rs      ◄─── Tokenizer, clap grammar, dispatch
//! │   ├── booking.rs  ◄─── book, status
//! │   ├── order.rs    ◄─── order, ticket, menu
//! │   ├── billing.rs  ◄─── bill
//! │   └── report.rs   ◄─── report
//! └── error.rs        ◄─── ConsoleError for commands
//! ```
//!
//! ## Input Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  --script night.tb ──► replay every line (no prompt)            │
//! │          │                                                      │
//! │          ▼  (unless `quit` was read or --no-interactive)        │
//! │  stdin ──────────────► prompt, read, dispatch, print            │
//! │          │                                                      │
//! │          ▼                                                      │
//! │  `quit` or end of input                                         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A command error is printed as `Error: <message>` and the loop carries
//! on. Only I/O failures end the process with an error.

pub mod commands;
pub mod error;
pub mod state;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::Reply;
use state::{AppState, ConfigState};

/// Process flags.
#[derive(Debug, Parser)]
#[command(name = "tablebook", version, about = "Restaurant table booking console")]
pub struct Cli {
    /// Replay commands from FILE before the interactive prompt
    #[arg(long, value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Exit after the script instead of reading stdin
    #[arg(long)]
    pub no_interactive: bool,
}

/// Runs the console until `quit` or end of input.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = ConfigState::from_env().context("Failed to load configuration")?;
    info!(restaurant = %config.restaurant_name, "Starting Tablebook console");

    let mut state = AppState::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &cli.script {
        let file = File::open(path)
            .with_context(|| format!("Failed to open script {}", path.display()))?;
        info!(script = %path.display(), "Replaying script");

        let finished = run_lines(&mut state, BufReader::new(file), &mut out, None)
            .with_context(|| format!("Failed to replay script {}", path.display()))?;
        if finished == Finished::Quit {
            return Ok(());
        }
    }

    if cli.no_interactive {
        return Ok(());
    }

    writeln!(out, "{}", state.config.restaurant_name)?;
    writeln!(out, "Type 'help' for commands, 'quit' to leave.")?;

    let prompt = state.config.prompt.clone();
    let stdin = io::stdin();
    run_lines(&mut state, stdin.lock(), &mut out, Some(&prompt))?;

    info!("Console closed");
    Ok(())
}

/// Why [`run_lines`] stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finished {
    Quit,
    EndOfInput,
}

/// Dispatches every line of `input`, writing replies and errors to `out`.
///
/// With a `prompt`, it is written and flushed before each read.
pub fn run_lines<R, W>(
    state: &mut AppState,
    mut input: R,
    out: &mut W,
    prompt: Option<&str>,
) -> io::Result<Finished>
where
    R: BufRead,
    W: Write,
{
    let mut line = String::new();

    loop {
        if let Some(prompt) = prompt {
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(Finished::EndOfInput);
        }

        match commands::dispatch(state, line.trim_end_matches(['\r', '\n'])) {
            Ok(Reply::Text(text)) => writeln!(out, "{}", text)?,
            Ok(Reply::Nothing) => {}
            Ok(Reply::Quit) => return Ok(Finished::Quit),
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "Command failed");
                writeln!(out, "Error: {}", err.message)?;
            }
        }
    }
}

/// Initializes the tracing subscriber. Logs go to stderr so they never mix
/// with command output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every dispatched command
/// - `RUST_LOG=tablebook_core=trace` - Trace the engine only
/// - Default: warnings, plus info from the tablebook crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,tablebook_core=info,tablebook_console=info")
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Finished, String) {
        let mut state = AppState::default();
        let mut out = Vec::new();
        let finished = run_lines(&mut state, script.as_bytes(), &mut out, None).unwrap();
        (finished, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_script_replay() {
        let (finished, output) = run_script(
            "# evening service\n\
             book 1 early\n\
             order 1 early \"Steak Diane\" -q 2 -d 2\n\
             bill 1 early -p \"credit card\" -t 5\n",
        );

        assert_eq!(finished, Finished::EndOfInput);
        assert_eq!(
            output,
            "Table 1 booked for early session.\n\
             Order placed for Table 1 for early session: 2 x Steak Diane (2 diners seated).\n\
             Total bill for Table 1 for early session: £114.98\n"
        );
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let (_, output) = run_script("book 9 early\nbook 1 early\n");
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Error: Invalid table number 9. Must be between 1 and 5.",
                "Table 1 booked for early session.",
            ]
        );
    }

    #[test]
    fn test_quit_stops_reading() {
        let (finished, output) = run_script("quit\nbook 1 early\n");
        assert_eq!(finished, Finished::Quit);
        assert!(output.is_empty());
    }

    #[test]
    fn test_prompt_written_before_each_read() {
        let mut state = AppState::default();
        let mut out = Vec::new();
        run_lines(&mut state, "status\r\n".as_bytes(), &mut out, Some("> ")).unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.starts_with("> Table 1 - Early: Free, Late: Free\n"));
        assert!(output.ends_with("> "));
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["tablebook", "--script", "night.tb", "--no-interactive"])
            .unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("night.tb")));
        assert!(cli.no_interactive);
    }
}
