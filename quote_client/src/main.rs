//! Quote Client — a terminal rendition of the "Debug Your Mind" widget. Pressing the
//! trigger fetches a random quote over HTTP on a background thread, never showing the
//! same quote twice in a row and falling back to built-in quotes when the remote API
//! fails. A pointer-down anywhere outside the quote box and the button hides the quote.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --tags technology,wisdom --timeout-secs 3
//! ```
//!
//! Gestures are read from stdin, one per line: `press`, `click <x> <y>`, `help`, `quit`.
//! Logs go to stderr (`RUST_LOG=debug` for details), the widget to stdout.
#![warn(missing_docs)]
mod app;
mod args;
mod input;
mod render;
mod worker;

use crate::app::{App, Flow};
use crate::args::Args;
use crate::input::spawn_stdin_reader;
use crate::render::default_layout;
use crate::worker::FetchWorker;
use clap::Parser;
use crossbeam_channel::{select, unbounded};
use log::{debug, info};
use quote_common::{HttpQuoteSource, QuoteError, QuoteProvider, Result};
use std::io;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use std::time::Duration;

/// How often the event loop checks for Ctrl+C when idle.
const SHUTDOWN_POLL: Duration = Duration::from_millis(200);

fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Shutting down client...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| QuoteError::Signal(e.to_string()))?;
    }

    let source = HttpQuoteSource::new(args.endpoint()?, args.timeout())?;
    info!(
        "Quote endpoint: {} (tags: {:?}, timeout: {:?}, max attempts: {})",
        source.endpoint().base_url,
        source.endpoint().tags,
        args.timeout(),
        args.max_attempts
    );
    let provider = Arc::new(QuoteProvider::new(source).with_max_attempts(args.max_attempts));

    let (done_tx, done_rx) = unbounded();
    let (input_tx, input_rx) = unbounded();
    let mut app = App::new(FetchWorker::new(provider, done_tx), default_layout());
    spawn_stdin_reader(input_tx);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app.handle_command(input::UiCommand::Help, &mut out)?;

    while !shutdown.load(Ordering::Relaxed) {
        select! {
            recv(input_rx) -> msg => {
                let command = msg.map_err(|e| QuoteError::ChannelRecv(e.to_string()))?;
                if app.handle_command(command, &mut out)? == Flow::Quit {
                    break;
                }
            },
            recv(done_rx) -> msg => {
                let done = msg.map_err(|e| QuoteError::ChannelRecv(e.to_string()))?;
                app.handle_fetched(done, &mut out)?;
            },
            default(SHUTDOWN_POLL) => {},
        }
    }

    if let Some(quote) = app.display().current() {
        info!("Last quote shown: {}", quote);
    }
    debug!(
        "{} pointer listener(s) registered at exit",
        app.bus().listener_count()
    );
    info!("Client stopped.");
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
