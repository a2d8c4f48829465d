//! Subscription handles and the listener registry

use parking_lot::Mutex;
use std::fmt;
use std::sync::Weak;

/// A registered listener callback.
///
/// Stored behind `Arc` so a notification pass can snapshot the registry
/// without cloning the closures themselves.
pub(crate) type Listener = std::sync::Arc<dyn Fn() + Send + Sync + 'static>;

/// The ordered listener registry: insertion order is notification order.
pub(crate) type Registry = Mutex<Vec<(SubscriptionId, Listener)>>;

/// Unique identifier for one registration in a store's registry
///
/// Registering the same callback twice produces two distinct ids, each
/// removable independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription:{}", self.0)
    }
}

/// Unsubscribe handle returned by [`Store::subscribe`]
///
/// Holds no strong reference to the store, so an outstanding handle never
/// keeps a discarded store alive. Dropping the handle does *not*
/// unsubscribe; removal only happens through [`unsubscribe`].
///
/// [`Store::subscribe`]: crate::Store::subscribe
/// [`unsubscribe`]: Subscription::unsubscribe
pub struct Subscription {
    id: SubscriptionId,
    registry: Weak<Registry>,
}

impl Subscription {
    pub(crate) fn new(id: SubscriptionId, registry: Weak<Registry>) -> Self {
        Self { id, registry }
    }

    /// The id of the registration this handle removes.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove this registration from the store's registry.
    ///
    /// Idempotent: calling it a second time, or after the store has been
    /// discarded, is a no-op. Other registrations keep their order and
    /// identity. A notification pass already in progress keeps its starting
    /// snapshot; removal takes effect from the next dispatch.
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut listeners = registry.lock();
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != self.id);
        if listeners.len() < before {
            tracing::trace!(id = %self.id, "listener unsubscribed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
