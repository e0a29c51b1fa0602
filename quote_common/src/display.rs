//! Visibility of the quote box.
//!
//! The box is either `Hidden` or `Shown`. Showing a quote (first time or as a
//! replacement) moves it to `Shown`; a pointer-down outside both the quote box and
//! the trigger button moves it back to `Hidden` and drops the quote. While shown,
//! the display holds a `Subscription` on the `PointerBus`, so the outside-click
//! listener exists exactly as long as there is something to dismiss.
use std::sync::Arc;

use crossbeam_channel::Receiver;
use log::debug;

use crate::pointer::{Point, PointerBus, Rect, Subscription};
use crate::quote::Quote;
use crate::result::Result;

/// Whether the quote box is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Nothing to show.
    Hidden,
    /// A quote is on screen.
    Shown,
}

/// Screen regions that do not count as "outside".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// The button that requests a quote.
    pub trigger: Rect,
    /// The box the quote is rendered in.
    pub quote_box: Rect,
}

impl Layout {
    /// `true` if `at` hits neither the trigger nor the quote box.
    pub fn is_outside(&self, at: Point) -> bool {
        !self.trigger.contains(at) && !self.quote_box.contains(at)
    }
}

/// Display slot for the current quote plus its outside-click listener.
#[derive(Debug)]
pub struct QuoteDisplay {
    bus: Arc<PointerBus>,
    layout: Layout,
    quote: Option<Quote>,
    subscription: Option<Subscription>,
}

impl QuoteDisplay {
    /// An empty, hidden display listening on `bus` once shown.
    pub fn new(bus: Arc<PointerBus>, layout: Layout) -> Self {
        Self {
            bus,
            layout,
            quote: None,
            subscription: None,
        }
    }

    /// Current state.
    pub fn visibility(&self) -> Visibility {
        if self.quote.is_some() {
            Visibility::Shown
        } else {
            Visibility::Hidden
        }
    }

    /// Regions used for hit testing.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The quote on screen, if any.
    pub fn current(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    /// Text of the quote on screen, empty when hidden.
    pub fn current_text(&self) -> &str {
        self.quote.as_ref().map(Quote::text).unwrap_or("")
    }

    /// Show `quote`, replacing any quote already shown.
    ///
    /// Registers the outside-click listener if it is not registered yet.
    pub fn show(&mut self, quote: Quote) -> Result<()> {
        if self.subscription.is_none() {
            self.subscription = Some(self.bus.subscribe()?);
        }
        debug!("Showing quote: {}", quote);
        self.quote = Some(quote);
        Ok(())
    }

    /// Set how many rows the quote box covers, so hit testing matches what is drawn.
    pub fn set_quote_box_height(&mut self, height: u16) {
        self.layout.quote_box.height = height;
    }

    /// Drop the quote and the listener.
    pub fn hide(&mut self) {
        self.quote = None;
        self.subscription = None;
    }

    /// React to a pointer-down; returns `true` if it dismissed the quote.
    pub fn handle_pointer_down(&mut self, at: Point) -> bool {
        if self.visibility() == Visibility::Shown && self.layout.is_outside(at) {
            debug!("Pointer-down at {:?} outside the quote box; hiding", at);
            self.hide();
            return true;
        }
        false
    }

    /// Pointer events routed to this display while it is shown.
    pub fn pointer_events(&self) -> Option<&Receiver<Point>> {
        self.subscription.as_ref().map(Subscription::receiver)
    }

    /// Handle every pointer-down already queued for this display.
    ///
    /// Returns `true` if one of them dismissed the quote.
    pub fn drain_pointer_events(&mut self) -> bool {
        let pending: Vec<Point> = match self.pointer_events() {
            Some(rx) => rx.try_iter().collect(),
            None => return false,
        };
        pending.into_iter().any(|at| self.handle_pointer_down(at))
    }
}
