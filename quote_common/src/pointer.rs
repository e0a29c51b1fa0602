//! Document-level pointer events.
//!
//! The `PointerBus` plays the role of a page-wide event target: every pointer-down
//! in the client is dispatched to it, and components that care about clicks
//! anywhere on screen subscribe. A subscription is an RAII guard; dropping it
//! removes the listener. Listeners whose receiving side is gone are pruned on
//! the next dispatch.
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use crossbeam_channel::{Receiver, Sender, unbounded};
use log::debug;

use crate::result::Result;

/// A terminal cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
}

impl Point {
    /// Creates a point.
    pub fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned screen region, half-open on the right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Left column.
    pub x: u16,
    /// Top row.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Creates a region.
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `true` if `point` lies inside the region.
    pub fn contains(&self, point: Point) -> bool {
        let x = u32::from(point.x);
        let y = u32::from(point.y);
        x >= u32::from(self.x)
            && x < u32::from(self.x) + u32::from(self.width)
            && y >= u32::from(self.y)
            && y < u32::from(self.y) + u32::from(self.height)
    }

    /// The cell in the middle of the region.
    pub fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }
}

/// Process-wide fan-out of pointer-down events.
#[derive(Debug, Default)]
pub struct PointerBus {
    next_id: AtomicU64,
    listeners: Mutex<HashMap<u64, Sender<Point>>>,
}

impl PointerBus {
    /// Creates a shared bus with no listeners.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Register a listener. It stays registered until the returned guard is dropped.
    pub fn subscribe(self: &Arc<Self>) -> Result<Subscription> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (tx, rx) = unbounded();
        self.listeners.lock()?.insert(id, tx);
        debug!("Pointer listener {} registered", id);

        Ok(Subscription {
            id,
            bus: Arc::downgrade(self),
            rx,
        })
    }

    /// Deliver a pointer-down to every listener; returns how many received it.
    pub fn dispatch(&self, at: Point) -> Result<usize> {
        let mut listeners = self.listeners.lock()?;
        listeners.retain(|_, tx| tx.send(at).is_ok());
        Ok(listeners.len())
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().map(|l| l.len()).unwrap_or(0)
    }

    fn unsubscribe(&self, id: u64) {
        if let Ok(mut listeners) = self.listeners.lock() {
            if listeners.remove(&id).is_some() {
                debug!("Pointer listener {} removed", id);
            }
        }
    }
}

/// Registration on a `PointerBus`; unregisters on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    bus: Weak<PointerBus>,
    rx: Receiver<Point>,
}

impl Subscription {
    /// Events delivered to this listener.
    pub fn receiver(&self) -> &Receiver<Point> {
        &self.rx
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            bus.unsubscribe(self.id);
        }
    }
}
