//! Event listener registration with scoped teardown
//!
//! A `Broadcaster` fans notifications out to any number of `Subscription`s.
//! A subscription unregisters itself when dropped, so a listener can never
//! outlive the value holding it. Delivery is queued: subscribers drain their
//! pending notifications on their own schedule.

use std::rc::{Rc, Weak};
use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};

/// Handle held by a listener; dropping it removes the listener
#[derive(Debug)]
pub struct Subscription<T> {
    rx: Receiver<T>,
    _alive: Rc<()>,
}

impl<T> Subscription<T> {
    /// Take every notification delivered since the last drain
    pub fn drain(&self) -> Vec<T> {
        let mut pending = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(value) => pending.push(value),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        pending
    }

    /// Drain and report whether anything had been delivered
    pub fn has_pending(&self) -> bool {
        !self.drain().is_empty()
    }
}

#[derive(Debug)]
struct Listener<T> {
    tx: Sender<T>,
    alive: Weak<()>,
}

/// Source side of a notification stream
#[derive(Debug)]
pub struct Broadcaster<T> {
    listeners: Vec<Listener<T>>,
}

impl<T: Clone> Broadcaster<T> {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self) -> Subscription<T> {
        self.prune();
        let (tx, rx) = channel();
        let alive = Rc::new(());
        self.listeners.push(Listener {
            tx,
            alive: Rc::downgrade(&alive),
        });
        Subscription { rx, _alive: alive }
    }

    /// Deliver `value` to every live listener
    pub fn emit(&mut self, value: T) {
        self.prune();
        for listener in &self.listeners {
            let _ = listener.tx.send(value.clone());
        }
    }

    /// Number of listeners whose subscription is still held
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.alive.strong_count() > 0)
            .count()
    }

    fn prune(&mut self) {
        self.listeners
            .retain(|listener| listener.alive.strong_count() > 0);
    }
}

impl<T: Clone> Default for Broadcaster<T> {
    fn default() -> Self {
        Self::new()
    }
}
