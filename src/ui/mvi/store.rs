//! Shared store: holds the current state snapshot and mediates
//! dispatch and subscription.
//!
//! The store is a cheap handle (`Clone` shares the same state), so a
//! subscriber can capture a clone and call [`Store::get_state`] when it
//! is notified. Locks are released before subscribers run, which means a
//! subscriber may read the store freely.

use std::marker::PhantomData;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, RwLock};

use super::intent::Intent;
use super::reducer::Reducer;

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

pub struct Store<R: Reducer> {
    state: Arc<RwLock<Arc<R::State>>>,
    listeners: Arc<Mutex<Listeners>>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            listeners: Arc::clone(&self.listeners),
            _reducer: PhantomData,
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: Arc::new(RwLock::new(Arc::new(initial))),
            listeners: Arc::new(Mutex::new(Listeners::default())),
            _reducer: PhantomData,
        }
    }

    /// Current snapshot. Later dispatches never mutate a returned snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        let current = self.state.read();
        Arc::clone(&*current)
    }

    /// Run the reducer against the current snapshot, replace it, then call
    /// every subscriber in the order they subscribed.
    pub fn dispatch(&self, intent: R::Intent) {
        let name = Intent::name(&intent);
        {
            let mut current = self.state.write();
            let next = R::reduce((**current).clone(), intent);
            *current = Arc::new(next);
        }
        tracing::debug!(intent = name, "dispatched");

        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }

    /// Register a listener invoked after every dispatch.
    ///
    /// Dropping the returned [`Subscription`] keeps the listener registered;
    /// call [`Subscription::unsubscribe`] to remove it.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut listeners = self.listeners.lock();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, Arc::new(listener)));
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }

    /// Number of registered listeners. Diagnostic only; nothing in the
    /// dispatch path reads it.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().entries.len()
    }
}

/// Handle returned by [`Store::subscribe`].
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Remove the listener. No-op once the store itself is gone.
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}
