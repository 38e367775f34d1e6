#![forbid(unsafe_code)]

//! Multi-consumer notification streams with explicit completion.
//!
//! # Design
//!
//! [`EventStream<T>`] is the single-producer side of a notification channel.
//! Any number of consumers (zero included) register callbacks with
//! [`subscribe()`](EventStream::subscribe) and keep the returned
//! [`Subscription`] alive for as long as they want to hear about events.
//!
//! # Failure Modes
//!
//! - **Callback panics**: the panic propagates to the caller of `emit()`.
//!   No stream borrow is held at that point, so the stream stays usable.
//! - **Emit after completion**: silently ignored (returns 0 deliveries).

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = dyn Fn(&T);

/// Shared interior for [`EventStream<T>`].
struct StreamInner<T> {
    /// Registered callbacks in registration order. Dead entries are pruned
    /// on the next emission.
    subscribers: Vec<Weak<Callback<T>>>,
    /// Set once by `complete()`; never reset.
    completed: bool,
    /// Number of emissions that reached the delivery phase.
    emitted: u64,
}

/// A shared notification stream.
///
/// Cloning an `EventStream` creates a new handle to the **same** stream, so
/// a producer can hand out read-only clones for consumers to subscribe on.
pub struct EventStream<T> {
    inner: Rc<RefCell<StreamInner<T>>>,
}

impl<T> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EventStream")
            .field("subscribers", &inner.subscribers.len())
            .field("completed", &inner.completed)
            .field("emitted", &inner.emitted)
            .finish()
    }
}

impl<T: 'static> EventStream<T> {
    /// Create an open stream with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(StreamInner {
                subscribers: Vec::new(),
                completed: false,
                emitted: 0,
            })),
        }
    }

    /// Register a callback invoked on every future emission.
    ///
    /// The callback stays registered while the returned [`Subscription`] is
    /// alive. Subscribing to a completed stream returns an inert
    /// subscription whose callback never fires.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        if inner.completed {
            return Subscription::inert();
        }
        let strong: Rc<Callback<T>> = Rc::new(callback);
        inner.subscribers.push(Rc::downgrade(&strong));
        Subscription {
            guard: Some(Box::new(strong)),
        }
    }
}

impl<T> EventStream<T> {
    /// Deliver `value` to every live subscriber, in registration order.
    ///
    /// Returns the number of callbacks invoked.
    pub fn emit(&self, value: &T) -> usize {
        let live: Vec<Rc<Callback<T>>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.completed {
                return 0;
            }
            inner.emitted += 1;
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            inner.subscribers.iter().filter_map(Weak::upgrade).collect()
        };
        for callback in &live {
            callback(value);
        }
        live.len()
    }

    /// Close the stream. Drops every registered callback.
    ///
    /// Idempotent: completing twice is a no-op.
    pub fn complete(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.completed {
            return;
        }
        inner.completed = true;
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "stream.complete",
            subscribers = inner.subscribers.len(),
            emitted = inner.emitted
        );
        inner.subscribers.clear();
    }

    /// Whether `complete()` has been called.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.inner.borrow().completed
    }

    /// Number of subscribers whose [`Subscription`] is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Number of emissions delivered since creation.
    #[must_use]
    pub fn emit_count(&self) -> u64 {
        self.inner.borrow().emitted
    }
}

impl EventStream<()> {
    /// Emit a payload-free notification.
    pub fn notify(&self) -> usize {
        self.emit(&())
    }
}

/// RAII guard for a stream callback. Dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes its callback"]
pub struct Subscription {
    guard: Option<Box<dyn Any>>,
}

impl Subscription {
    fn inert() -> Self {
        Self { guard: None }
    }

    /// Whether this subscription was registered on an open stream.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.guard.is_some()
    }

    /// Explicitly unsubscribe. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.is_attached())
            .finish()
    }
}
