//! Deferred completion of swipe gestures.
//!
//! A gesture's second phase runs after the settle delay. Each scheduled
//! completion is identified by a [`SettleTicket`] that also records the deck
//! version it was issued against, so late completions can be recognised
//! and discarded by the session.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Default pause between a gesture and the cursor advance
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SettleTicket {
    /// Unique per session, increasing in issue order
    pub id: u64,
    /// Deck version captured when the gesture started
    pub version: u64,
}

/// Schedules tickets to come due after a delay.
///
/// Implementations never block the caller; due tickets are collected with
/// `drain_due` from the thread that owns the session.
pub trait SettleScheduler: Send {
    fn schedule(&mut self, ticket: SettleTicket, delay: Duration);

    /// Drops a scheduled ticket. Unknown or already-due tickets are ignored.
    fn cancel(&mut self, ticket: SettleTicket);

    /// Returns tickets whose delay has elapsed, in the order they fired
    fn drain_due(&mut self) -> Vec<SettleTicket>;
}

/// Scheduler backed by tokio timers.
///
/// Every ticket gets a sleeping task on the given runtime; when it wakes it
/// pushes the ticket onto a channel that `drain_due` empties.
pub struct TokioSettleScheduler {
    handle: Handle,
    due_tx: mpsc::UnboundedSender<SettleTicket>,
    due_rx: mpsc::UnboundedReceiver<SettleTicket>,
    timers: HashMap<u64, JoinHandle<()>>,
}

impl TokioSettleScheduler {
    pub fn new(handle: Handle) -> Self {
        let (due_tx, due_rx) = mpsc::unbounded_channel();
        Self {
            handle,
            due_tx,
            due_rx,
            timers: HashMap::new(),
        }
    }

    /// Number of timers still sleeping
    pub fn pending(&self) -> usize {
        self.timers.values().filter(|t| !t.is_finished()).count()
    }
}

impl SettleScheduler for TokioSettleScheduler {
    fn schedule(&mut self, ticket: SettleTicket, delay: Duration) {
        // Deadline is fixed now, not when the task is first polled
        let deadline = tokio::time::Instant::now() + delay;
        let due_tx = self.due_tx.clone();
        let timer = self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = due_tx.send(ticket);
        });
        self.timers.insert(ticket.id, timer);
    }

    fn cancel(&mut self, ticket: SettleTicket) {
        if let Some(timer) = self.timers.remove(&ticket.id) {
            timer.abort();
        }
    }

    fn drain_due(&mut self) -> Vec<SettleTicket> {
        let mut due = Vec::new();
        while let Ok(ticket) = self.due_rx.try_recv() {
            self.timers.remove(&ticket.id);
            due.push(ticket);
        }
        due
    }
}

impl Drop for TokioSettleScheduler {
    fn drop(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.abort();
        }
    }
}

#[derive(Debug, Default)]
struct ManualState {
    scheduled: VecDeque<(SettleTicket, Duration)>,
    due: VecDeque<SettleTicket>,
}

/// Scheduler whose tickets only come due when told to.
///
/// Clones share state, so a caller can keep one handle to fire tickets while
/// the session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        // A poisoned lock only means a test panicked mid-update; the queues
        // are still consistent.
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Makes the oldest scheduled ticket due
    pub fn fire_next(&self) -> Option<SettleTicket> {
        let mut state = self.lock();
        let (ticket, _) = state.scheduled.pop_front()?;
        state.due.push_back(ticket);
        Some(ticket)
    }

    /// Makes every scheduled ticket due, oldest first
    pub fn fire_all(&self) -> usize {
        let mut state = self.lock();
        let fired: Vec<_> = state.scheduled.drain(..).map(|(t, _)| t).collect();
        let count = fired.len();
        state.due.extend(fired);
        count
    }

    pub fn scheduled(&self) -> Vec<(SettleTicket, Duration)> {
        self.lock().scheduled.iter().copied().collect()
    }
}

impl SettleScheduler for ManualScheduler {
    fn schedule(&mut self, ticket: SettleTicket, delay: Duration) {
        self.lock().scheduled.push_back((ticket, delay));
    }

    fn cancel(&mut self, ticket: SettleTicket) {
        self.lock().scheduled.retain(|(t, _)| t.id != ticket.id);
    }

    fn drain_due(&mut self) -> Vec<SettleTicket> {
        self.lock().due.drain(..).collect()
    }
}
