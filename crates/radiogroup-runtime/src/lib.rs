#![forbid(unsafe_code)]

//! Runtime plumbing for radiogroup controls: notification streams and
//! subscription lifetimes.

pub mod reactive;

pub use reactive::{BindingScope, EventStream, Subscription};
