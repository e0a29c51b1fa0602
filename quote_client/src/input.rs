//! User gestures read from stdin.
//!
//! One command per line:
//! - `press` / `p` — pointer-down on the trigger button
//! - `click <x> <y>` — pointer-down at a screen cell
//! - `help` / `h` — list commands
//! - `quit` / `q` — leave
use std::io::BufRead;
use std::str::FromStr;
use std::thread;

use crossbeam_channel::Sender;
use log::{debug, info, warn};
use quote_common::pointer::Point;
use quote_common::{QuoteError, Result};

/// Help text printed for `help`.
pub const HELP: &str = "commands: press | click <x> <y> | help | quit";

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Press the trigger button.
    Press,
    /// Pointer-down at a cell.
    Click(Point),
    /// Print the command list.
    Help,
    /// Exit the client.
    Quit,
}

impl FromStr for UiCommand {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let verb = parts
            .next()
            .ok_or_else(|| QuoteError::Format("empty command".to_string()))?
            .to_ascii_lowercase();

        let command = match verb.as_str() {
            "press" | "p" => UiCommand::Press,
            "help" | "h" => UiCommand::Help,
            "quit" | "q" | "exit" => UiCommand::Quit,
            "click" | "c" => {
                let x = parse_coord(parts.next(), "x")?;
                let y = parse_coord(parts.next(), "y")?;
                UiCommand::Click(Point::new(x, y))
            }
            other => return Err(QuoteError::Format(format!("unknown command `{}`", other))),
        };

        if let Some(extra) = parts.next() {
            return Err(QuoteError::Format(format!("unexpected argument `{}`", extra)));
        }
        Ok(command)
    }
}

fn parse_coord(raw: Option<&str>, name: &str) -> Result<u16> {
    let raw = raw.ok_or_else(|| QuoteError::Format(format!("missing {} coordinate", name)))?;
    raw.parse()
        .map_err(|e| QuoteError::Format(format!("invalid {} coordinate `{}`: {}", name, raw, e)))
}

/// Forward parsed commands from `reader` to `tx` until end of input or `quit`.
///
/// Blank lines are skipped and malformed lines are logged. End of input is
/// reported as `Quit`.
pub fn read_commands<R: BufRead>(reader: R, tx: &Sender<UiCommand>) -> Result<()> {
    for line_result in reader.lines() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<UiCommand>() {
            Ok(command) => {
                debug!("Input command: {:?}", command);
                tx.send(command)
                    .map_err(|e| QuoteError::ChannelSend(e.to_string()))?;
                if command == UiCommand::Quit {
                    return Ok(());
                }
            }
            Err(e) => warn!("Ignoring input `{}`: {}. {}", line.trim(), e, HELP),
        }
    }

    info!("Input closed");
    tx.send(UiCommand::Quit)
        .map_err(|e| QuoteError::ChannelSend(e.to_string()))
}

/// Spawn a thread reading commands from stdin.
pub fn spawn_stdin_reader(tx: Sender<UiCommand>) {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        if let Err(e) = read_commands(stdin.lock(), &tx) {
            debug!("Input reader stopped: {}", e);
        }
    });
}
