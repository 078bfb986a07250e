//! Change-notification plumbing shared by the stateful stores.
//!
//! Both the cart store and the localization resolver hand consumers an
//! immutable snapshot after each completed command. Callbacks hold no
//! reference back to the store, so a notification can never re-enter a
//! mutation that is still in progress.

/// Handle identifying a registered observer, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A registry of observer callbacks for snapshot values of type `T`.
pub struct Observers<T> {
    entries: Vec<(SubscriptionId, Box<dyn Fn(&T)>)>,
    next_id: u64,
}

impl<T> Observers<T> {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback, returning a handle for later removal.
    pub fn subscribe(&mut self, observer: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(observer)));
        id
    }

    /// Remove a previously registered callback.
    ///
    /// Returns `false` if the handle was already removed or never issued
    /// by this registry.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() < before
    }

    /// Invoke every registered callback with the given snapshot.
    pub fn notify(&self, snapshot: &T) {
        for (_, observer) in &self.entries {
            observer(snapshot);
        }
    }

    /// Whether any observers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish()
    }
}
