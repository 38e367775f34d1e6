#![forbid(unsafe_code)]

//! Lifetime management for groups of stream subscriptions.
//!
//! A host field usually listens to several streams of one control (state
//! changes, container clicks, rendered rows). [`BindingScope`] holds all of
//! those [`Subscription`]s so they can be released together when the host
//! goes away.
//!
//! # Usage
//!
//! ```
//! use radiogroup_runtime::{BindingScope, EventStream};
//!
//! let changes = EventStream::<()>::new();
//! let mut scope = BindingScope::new();
//! scope.subscribe(&changes, |_| {});
//! assert_eq!(scope.binding_count(), 1);
//!
//! drop(scope);
//! assert_eq!(changes.subscriber_count(), 0);
//! ```
//!
//! # Invariants
//!
//! 1. Subscriptions are released in reverse registration order on drop.
//! 2. After drop or `clear()`, no callback from this scope fires.
//! 3. `clear()` leaves the scope reusable.

use super::stream::{EventStream, Subscription};

/// Collects subscriptions for a logical owner.
pub struct BindingScope {
    subscriptions: Vec<Subscription>,
}

impl BindingScope {
    /// Create an empty binding scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }

    /// Keep `sub` alive until the scope is dropped or cleared.
    pub fn hold(&mut self, sub: Subscription) {
        self.subscriptions.push(sub);
    }

    /// Subscribe to a stream within this scope.
    ///
    /// Returns a reference to the scope for chaining.
    pub fn subscribe<T: 'static>(
        &mut self,
        source: &EventStream<T>,
        callback: impl Fn(&T) + 'static,
    ) -> &mut Self {
        let sub = source.subscribe(callback);
        self.subscriptions.push(sub);
        self
    }

    /// Number of subscriptions held.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.subscriptions.len()
    }

    /// Whether the scope holds no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Release all subscriptions immediately.
    pub fn clear(&mut self) {
        while let Some(sub) = self.subscriptions.pop() {
            drop(sub);
        }
    }
}

impl Default for BindingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BindingScope {
    fn drop(&mut self) {
        self.clear();
    }
}

impl std::fmt::Debug for BindingScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BindingScope")
            .field("binding_count", &self.subscriptions.len())
            .finish()
    }
}
