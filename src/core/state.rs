//! Observable single-value cell.
//!
//! The cell owns the current snapshot and a list of subscribers. Every replacement is
//! applied and fanned out under one lock, so all observers see the same sequence of
//! snapshots and no snapshot is skipped. New subscribers get the current value first.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

type Callback<T> = Box<dyn Fn(&Arc<T>) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

enum Subscriber<T> {
    Callback(SubscriptionId, Callback<T>),
    Channel(UnboundedSender<Arc<T>>),
}

impl<T> Subscriber<T> {
    /// Returns false once the subscriber can no longer receive.
    fn notify(&self, value: &Arc<T>) -> bool {
        match self {
            Subscriber::Callback(_, callback) => {
                callback(value);
                true
            }
            Subscriber::Channel(tx) => tx.send(Arc::clone(value)).is_ok(),
        }
    }
}

struct Inner<T> {
    current: Arc<T>,
    subscribers: Vec<Subscriber<T>>,
}

pub struct StateCell<T> {
    inner: Mutex<Inner<T>>,
    next_id: AtomicU64,
}

impl<T: Send + Sync + 'static> StateCell<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Mutex::new(Inner {
                current: Arc::new(initial),
                subscribers: Vec::new(),
            }),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn current(&self) -> Arc<T> {
        Arc::clone(&self.lock().current)
    }

    /// Replaces the current value and notifies every subscriber.
    pub fn publish(&self, value: T) {
        self.replace_with(|_| Some(value));
    }

    /// Computes the next value from the current one while holding the lock.
    ///
    /// Returning `None` keeps the current value and notifies nobody. Returns whether a
    /// replacement happened.
    pub fn replace_with<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> Option<T>,
    {
        let mut inner = self.lock();
        let Some(next) = f(inner.current.as_ref()) else {
            return false;
        };

        let next = Arc::new(next);
        inner.current = Arc::clone(&next);
        inner.subscribers.retain(|s| s.notify(&next));
        true
    }

    /// Registers a callback. It runs immediately with the current value and then on
    /// every replacement, on the publishing thread.
    ///
    /// The callback must not call back into this cell.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Arc<T>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut inner = self.lock();
        callback(&inner.current);
        inner
            .subscribers
            .push(Subscriber::Callback(id, Box::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.subscribers.len();
        inner
            .subscribers
            .retain(|s| !matches!(s, Subscriber::Callback(sid, _) if *sid == id));
        inner.subscribers.len() != before
    }

    /// Channel flavour of [`subscribe`](Self::subscribe). Dropping the receiver unsubscribes.
    pub fn updates(&self) -> UnboundedReceiver<Arc<T>> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.lock();
        // receiver is alive, cannot fail
        let _ = tx.send(Arc::clone(&inner.current));
        inner.subscribers.push(Subscriber::Channel(tx));
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // a panicking callback must not wedge the cell
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
