//! The single-store state container

use crate::{
    action::Action,
    error::{Error, Result},
    reducer::Reducer,
    subscription::{Listener, Registry, Subscription, SubscriptionId},
};
use parking_lot::Mutex;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Current state plus the reducer that produces the next one.
///
/// Guarded by a single mutex so no two reducer runs interleave on the same
/// state and `get_state` never sees a half-committed value.
struct Cell<S, A> {
    state: S,
    reducer: Box<dyn Reducer<S, A>>,
}

struct Inner<S, A> {
    cell: Mutex<Cell<S, A>>,
    listeners: Arc<Registry>,
    next_subscription: AtomicU64,
}

/// The state container: one state value, one current reducer, one ordered
/// listener registry
///
/// `Store` is a cheap handle over shared innards; clone it freely to hand
/// to listeners or other components. All clones observe the same state.
///
/// Locking is scoped so that listener callbacks run with no store lock
/// held: a listener may read state or dispatch again without deadlocking.
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A: Action> Store<S, A> {
    /// Create a store, deriving the initial state from the reducer's answer
    /// to "no prior state" plus `init_action`.
    ///
    /// Fails with [`Error::Reducer`] if that first reduction fails; no store
    /// is produced in that case.
    pub fn new(reducer: impl Reducer<S, A> + 'static, init_action: A) -> Result<Self> {
        let state = run_reducer(&reducer, None, &init_action)?;
        tracing::debug!(kind = init_action.kind(), "store initialized");
        Ok(Self {
            inner: Arc::new(Inner {
                cell: Mutex::new(Cell {
                    state,
                    reducer: Box::new(reducer),
                }),
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_subscription: AtomicU64::new(0),
            }),
        })
    }

    /// Return a clone of the current state, synchronously and with no side
    /// effects.
    ///
    /// Reflects the most recently completed dispatch, or the initial state
    /// if none has happened yet.
    pub fn get_state(&self) -> S
    where
        S: Clone,
    {
        self.inner.cell.lock().state.clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.cell.lock().state)
    }

    /// Feed `action` through the current reducer, commit the result, then
    /// notify listeners.
    ///
    /// The new state is committed before any listener runs. Listeners are
    /// invoked in registration order, each exactly once, from a snapshot of
    /// the registry taken when the pass starts: subscribing or unsubscribing
    /// mid-pass only affects later dispatches. A listener may itself call
    /// `dispatch`; the nested dispatch runs immediately and to completion,
    /// including its own notification pass over a fresh snapshot, before the
    /// outer pass resumes with its original snapshot.
    ///
    /// Returns the action back on success. If the reducer fails, the state
    /// is left untouched, no listener is notified, and the error propagates
    /// to the caller.
    pub fn dispatch(&self, action: A) -> Result<A> {
        let snapshot = {
            let mut cell = self.inner.cell.lock();
            let next = run_reducer(cell.reducer.as_ref(), Some(&cell.state), &action)?;
            cell.state = next;
            // Snapshot while the state lock is still held, so a dispatch
            // racing on another thread cannot reorder commit and snapshot.
            self.inner.listeners.lock().clone()
        };
        tracing::trace!(
            kind = action.kind(),
            listeners = snapshot.len(),
            "action dispatched"
        );
        for (_, listener) in &snapshot {
            listener();
        }
        Ok(action)
    }

    /// Register `listener` to run, with no arguments, after every successful
    /// dispatch.
    ///
    /// Listeners needing the new state re-read it through a store handle.
    /// Registering the same callback twice creates two independent
    /// registrations, each notified per dispatch and each removable on its
    /// own. Returns the handle that removes exactly this registration.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = SubscriptionId::new(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner
            .listeners
            .lock()
            .push((id, Arc::new(listener) as Listener));
        tracing::trace!(id = %id, "listener subscribed");
        Subscription::new(id, Arc::downgrade(&self.inner.listeners))
    }

    /// Swap in `new_reducer` for all future dispatches.
    ///
    /// Does not dispatch, does not change the current state, does not
    /// notify listeners.
    pub fn replace_reducer(&self, new_reducer: impl Reducer<S, A> + 'static) {
        self.inner.cell.lock().reducer = Box::new(new_reducer);
        tracing::debug!("reducer replaced");
    }
}

fn run_reducer<S, A, R>(reducer: &R, state: Option<&S>, action: &A) -> Result<S>
where
    A: Action,
    R: Reducer<S, A> + ?Sized,
{
    reducer
        .reduce(state, action)
        .map_err(|source| Error::Reducer {
            kind: action.kind().to_owned(),
            source,
        })
}
