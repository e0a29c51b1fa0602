//! Client state: the quote display, the pointer bus and in-flight requests.
//!
//! Every pointer-down goes to the `PointerBus` first, the way a page-level
//! listener sees every click, and is handled by the display's outside-click
//! listener before the trigger button reacts to it.
use std::io::Write;
use std::sync::Arc;

use log::{debug, info};
use quote_common::pointer::{Point, PointerBus};
use quote_common::provider::Origin;
use quote_common::source::QuoteSource;
use quote_common::{Layout, QuoteDisplay, Result};

use crate::input::{HELP, UiCommand};
use crate::render::{box_height, render};
use crate::worker::{FetchDone, FetchWorker};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Glue between input, background fetches and the display.
pub struct App<S> {
    worker: FetchWorker<S>,
    bus: Arc<PointerBus>,
    display: QuoteDisplay,
    pending: Option<u64>,
}

impl<S> App<S>
where
    S: QuoteSource + Send + Sync + 'static,
{
    /// New client with nothing shown.
    pub fn new(worker: FetchWorker<S>, layout: Layout) -> Self {
        let bus = PointerBus::new();
        let display = QuoteDisplay::new(Arc::clone(&bus), layout);
        Self {
            worker,
            bus,
            display,
            pending: None,
        }
    }

    /// The quote display.
    pub fn display(&self) -> &QuoteDisplay {
        &self.display
    }

    /// The page-level pointer bus.
    pub fn bus(&self) -> &Arc<PointerBus> {
        &self.bus
    }

    /// `true` while the latest request has not answered yet.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply one input command, redrawing to `out` when something changed.
    pub fn handle_command<W: Write>(&mut self, command: UiCommand, out: &mut W) -> Result<Flow> {
        match command {
            UiCommand::Press => {
                let at = self.display.layout().trigger.center();
                self.pointer_down(at, out)?;
            }
            UiCommand::Click(at) => self.pointer_down(at, out)?,
            UiCommand::Help => writeln!(out, "{}", HELP)?,
            UiCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Dispatch a pointer-down to the page, then to the trigger button.
    pub fn pointer_down<W: Write>(&mut self, at: Point, out: &mut W) -> Result<()> {
        let listeners = self.bus.dispatch(at)?;
        debug!("Pointer-down at {:?} delivered to {} listener(s)", at, listeners);
        let mut changed = self.display.drain_pointer_events();

        if self.display.layout().trigger.contains(at) {
            let ticket = self.worker.request(self.display.current_text());
            self.pending = Some(ticket);
            changed = true;
        }

        if changed {
            self.redraw(out)?;
        }
        Ok(())
    }

    /// Show a finished request unless a newer one has started since.
    ///
    /// Returns `true` if the result was displayed.
    pub fn handle_fetched<W: Write>(&mut self, done: FetchDone, out: &mut W) -> Result<bool> {
        if !self.worker.is_latest(done.ticket) {
            debug!("Dropping result of superseded request #{}", done.ticket);
            return Ok(false);
        }

        let FetchDone { ticket, fetched } = done;
        match fetched.origin {
            Origin::Remote => info!(
                "Request #{} answered by remote after {} attempt(s)",
                ticket, fetched.attempts
            ),
            Origin::Fallback => info!("Request #{} answered from the fallback pool", ticket),
        }

        self.pending = None;
        let height = box_height(&fetched.quote, self.display.layout().quote_box.width);
        self.display.set_quote_box_height(height);
        self.display.show(fetched.quote)?;
        self.redraw(out)?;
        Ok(true)
    }

    fn redraw<W: Write>(&self, out: &mut W) -> Result<()> {
        render(
            out,
            self.display.layout(),
            self.display.current(),
            self.is_loading(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::default_layout;
    use crossbeam_channel::{Receiver, unbounded};
    use quote_common::provider::QuoteProvider;
    use quote_common::FallbackPool;
    use quote_common::{Quote, QuoteError, Visibility};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    struct Scripted(Mutex<VecDeque<Result<Quote>>>);

    impl Scripted {
        fn new(script: Vec<Result<Quote>>) -> Self {
            Self(Mutex::new(script.into()))
        }
    }

    impl QuoteSource for Scripted {
        fn fetch(&self) -> Result<Quote> {
            self.0
                .lock()?
                .pop_front()
                .unwrap_or_else(|| Err(QuoteError::Network("script exhausted".into())))
        }
    }

    fn quote(text: &str, author: &str) -> Quote {
        Quote::new(text, author).unwrap()
    }

    fn app(script: Vec<Result<Quote>>) -> (App<Scripted>, Receiver<FetchDone>) {
        let (tx, rx) = unbounded();
        let provider = Arc::new(QuoteProvider::new(Scripted::new(script)));
        (App::new(FetchWorker::new(provider, tx), default_layout()), rx)
    }

    fn next(rx: &Receiver<FetchDone>) -> FetchDone {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn press_fetches_and_shows_the_quote() {
        let (mut app, rx) = app(vec![Ok(quote("A", "X")), Ok(quote("B", "Y"))]);
        let mut out = Vec::new();

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        assert!(app.is_loading());
        assert!(app.handle_fetched(next(&rx), &mut out).unwrap());
        assert_eq!(app.display().visibility(), Visibility::Shown);
        assert_eq!(app.display().current(), Some(&quote("A", "X")));
        assert!(!app.is_loading());

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        app.handle_fetched(next(&rx), &mut out).unwrap();
        assert_eq!(app.display().current(), Some(&quote("B", "Y")));

        let screen = String::from_utf8(out).unwrap();
        assert!(screen.contains("~ Y"));
    }

    #[test]
    fn outside_click_hides_and_releases_the_listener() {
        let (mut app, rx) = app(vec![Ok(quote("A", "X"))]);
        let mut out = Vec::new();

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        app.handle_fetched(next(&rx), &mut out).unwrap();
        assert_eq!(app.bus().listener_count(), 1);

        let inside_box = app.display().layout().quote_box.center();
        app.handle_command(UiCommand::Click(inside_box), &mut out).unwrap();
        assert_eq!(app.display().visibility(), Visibility::Shown);

        app.handle_command(UiCommand::Click(Point::new(200, 40)), &mut out)
            .unwrap();
        assert_eq!(app.display().visibility(), Visibility::Hidden);
        assert_eq!(app.bus().listener_count(), 0);
    }

    #[test]
    fn clicks_on_every_drawn_row_of_a_long_quote_stay_inside() {
        let long = FallbackPool::builtin().quotes()[3].clone();
        let (mut app, rx) = app(vec![Ok(long.clone())]);
        let mut out = Vec::new();

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        app.handle_fetched(next(&rx), &mut out).unwrap();

        let quote_box = app.display().layout().quote_box;
        let rows = box_height(&long, quote_box.width);
        assert!(rows > 4);
        assert_eq!(quote_box.height, rows);

        for row in quote_box.y..quote_box.y + rows {
            app.handle_command(UiCommand::Click(Point::new(1, row)), &mut out)
                .unwrap();
            assert_eq!(
                app.display().visibility(),
                Visibility::Shown,
                "click on drawn row {row} dismissed the quote"
            );
        }

        app.handle_command(UiCommand::Click(Point::new(1, quote_box.y + rows)), &mut out)
            .unwrap();
        assert_eq!(app.display().visibility(), Visibility::Hidden);
    }

    #[test]
    fn pressing_again_keeps_the_quote_until_the_new_one_arrives() {
        let (mut app, rx) = app(vec![Ok(quote("A", "X")), Ok(quote("B", "Y"))]);
        let mut out = Vec::new();

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        app.handle_fetched(next(&rx), &mut out).unwrap();

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        assert_eq!(app.display().visibility(), Visibility::Shown);
        assert_eq!(app.display().current_text(), "A");

        app.handle_fetched(next(&rx), &mut out).unwrap();
        assert_eq!(app.display().current_text(), "B");
    }

    #[test]
    fn superseded_results_are_dropped() {
        let (mut app, rx) = app(vec![Ok(quote("A", "X")), Ok(quote("B", "Y"))]);
        let mut out = Vec::new();

        app.handle_command(UiCommand::Press, &mut out).unwrap();
        app.handle_command(UiCommand::Press, &mut out).unwrap();

        let mut results = vec![next(&rx), next(&rx)];
        results.sort_by_key(|d| d.ticket);
        let newest = results.pop().unwrap();
        let oldest = results.pop().unwrap();

        assert!(app.handle_fetched(newest.clone(), &mut out).unwrap());
        assert!(!app.handle_fetched(oldest, &mut out).unwrap());
        assert_eq!(app.display().current(), Some(&newest.fetched.quote));
    }

    #[test]
    fn quit_and_help() {
        let (mut app, _rx) = app(Vec::new());
        let mut out = Vec::new();
        assert_eq!(app.handle_command(UiCommand::Help, &mut out).unwrap(), Flow::Continue);
        assert_eq!(String::from_utf8(out.clone()).unwrap().trim(), HELP);
        assert_eq!(app.handle_command(UiCommand::Quit, &mut out).unwrap(), Flow::Quit);
    }
}
