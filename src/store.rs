//! Shared last-value store for the dataset load state.
//!
//! A single producer sets the state; any number of observers are notified on every
//! transition, and a new observer is immediately replayed the current state.
//! Everything here is single-threaded (`Rc`/`RefCell`), no locking involved.

use crate::models::{Dataset, LoadState};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Observer = Rc<RefCell<dyn FnMut(&LoadState)>>;

#[derive(Default)]
struct Inner {
    state: RefCell<LoadState>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_id: Cell<u64>,
    /// Bumped on every `set`; a broadcast stops once it no longer matches.
    generation: Cell<u64>,
    notifying: Cell<bool>,
}

/// Clears the in-broadcast flag on every exit path, unwinding included.
struct NotifyGuard<'a>(&'a Cell<bool>);

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Cache-of-last-value broadcast of the `LoadState`.
///
/// Cloning the store yields another handle to the same state.
#[derive(Clone, Default)]
pub struct DataStore {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for DataStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataStore")
            .field("state", &*self.inner.state.borrow())
            .field("observers", &self.observer_count())
            .finish()
    }
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> LoadState {
        self.inner.state.borrow().clone()
    }

    /// The published dataset, if the state is `Loaded`.
    pub fn dataset(&self) -> Option<Rc<Dataset>> {
        self.inner.state.borrow().dataset().cloned()
    }

    /// Replace the current state and notify every registered observer.
    ///
    /// A `set` issued by an observer during a broadcast only records the new state;
    /// the running broadcast is abandoned and restarted with the newest state, so every
    /// observer ends on the value the store holds.
    pub fn set(&self, state: LoadState) {
        log::debug!("data store transition -> {}", describe(&state));
        *self.inner.state.borrow_mut() = state;
        self.inner.generation.set(self.inner.generation.get() + 1);
        if self.inner.notifying.get() {
            return;
        }
        self.inner.notifying.set(true);
        let _guard = NotifyGuard(&self.inner.notifying);

        loop {
            let generation = self.inner.generation.get();
            let current = self.state();
            // Snapshot so observers may (un)subscribe while being notified.
            let observers: Vec<Observer> = self
                .inner
                .observers
                .borrow()
                .iter()
                .map(|(_, o)| Rc::clone(o))
                .collect();
            for obs in observers {
                if self.inner.generation.get() != generation {
                    break;
                }
                if let Ok(mut f) = obs.try_borrow_mut() {
                    (*f)(&current);
                }
            }
            if self.inner.generation.get() == generation {
                break;
            }
        }
    }

    /// Register an observer. It is called right away with the current state and then
    /// on every later transition, until the returned `Subscription` is released.
    #[must_use = "dropping the subscription unregisters the observer"]
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: FnMut(&LoadState) + 'static,
    {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let obs: Observer = Rc::new(RefCell::new(observer));
        self.inner
            .observers
            .borrow_mut()
            .push((id, Rc::clone(&obs)));

        let current = self.state();
        (*obs.borrow_mut())(&current);

        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
            active: true,
        }
    }

    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

fn describe(state: &LoadState) -> String {
    match state {
        LoadState::NotLoaded => "not loaded".into(),
        LoadState::Loaded(d) => format!("loaded ({} countries)", d.len()),
        LoadState::Failed => "load failed".into(),
    }
}

/// Registration handle returned by `DataStore::subscribe`.
///
/// Unregisters on drop. Holds only a weak reference, so an outliving subscription
/// keeps neither the store nor its dataset alive.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    store: Weak<Inner>,
    active: bool,
}

impl Subscription {
    /// Release the registration now instead of at drop time.
    pub fn unsubscribe(mut self) {
        self.release();
    }

    pub fn is_active(&self) -> bool {
        self.active && self.store.strong_count() > 0
    }

    fn release(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(inner) = self.store.upgrade() {
            inner.observers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
