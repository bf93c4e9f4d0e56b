//! In-process change notifications between a queue store and optimizer drivers.
//!
//! The queue store publishes a nudge whenever the waitlist changes; a caller
//! holding a [`QueueSubscription`] wakes up, re-fetches a fresh snapshot and
//! decides whether to re-optimize. The channel carries no payload and makes no
//! ordering or delivery guarantee beyond: a publish after a subscribe
//! eventually wakes the subscriber. Transport (websockets, polling, ...) is
//! the caller's concern.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use log::debug;

/// Fan-out nudge channel. Publishing never blocks; subscribers that dropped
/// their [`QueueSubscription`] are pruned on the next publish.
#[derive(Debug, Default)]
pub struct QueueWatch {
    subscribers: Mutex<Vec<Sender<()>>>,
}

impl QueueWatch {
    pub fn new() -> QueueWatch {
        QueueWatch::default()
    }

    /// Registers a subscriber. The returned subscription is woken by every
    /// publish that happens after this call.
    pub fn subscribe(&self) -> QueueSubscription {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().expect("queue watch poisoned").push(tx);
        QueueSubscription { rx }
    }

    /// Wakes all current subscribers.
    pub fn publish(&self) {
        let mut subscribers = self.subscribers.lock().expect("queue watch poisoned");
        let before = subscribers.len();
        subscribers.retain(|tx| tx.send(()).is_ok());
        if subscribers.len() < before {
            debug!("[WATCH] pruned {} dropped subscriber(s)", before - subscribers.len());
        }
    }
}

/// Receiving end of a [`QueueWatch`].
#[derive(Debug)]
pub struct QueueSubscription {
    rx: Receiver<()>,
}

impl QueueSubscription {
    /// Blocks until the next notification. Returns false once the watch has
    /// been dropped and no further notification can arrive.
    pub fn wait(&self) -> bool {
        self.rx.recv().is_ok()
    }

    /// Like [`wait`](Self::wait), giving up after `timeout`.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Discards queued notifications so a slow consumer coalesces a burst of
    /// changes into a single refresh.
    pub fn drain(&self) {
        while self.rx.try_recv().is_ok() {}
    }
}
