#![forbid(unsafe_code)]

//! Change notification primitives for radiogroup controls.
//!
//! - [`EventStream`]: a shared, multi-consumer notification stream that can
//!   be completed exactly once.
//! - [`Subscription`]: RAII guard that automatically unsubscribes on drop.
//! - [`BindingScope`]: collects subscriptions for one logical owner (a host
//!   field, a rendering surface) and releases them together.
//!
//! # Architecture
//!
//! `EventStream<T>` uses `Rc<RefCell<..>>` for single-threaded shared
//! ownership. Subscribers are stored as `Weak` function pointers and cleaned
//! up lazily during emission; the strong pointer lives in the
//! [`Subscription`] returned to the caller.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. Emission happens after the caller has finished mutating its state;
//!    callbacks run with no stream borrow held, so they may read the emitter
//!    or subscribe again.
//! 3. Dropping a [`Subscription`] removes the callback before the next
//!    emission.
//! 4. After `complete()`, `emit()` is a no-op and new subscriptions are
//!    inert.

pub mod binding;
pub mod stream;

pub use binding::BindingScope;
pub use stream::{EventStream, Subscription};
