//! Opt-in persistence of user-facing control state.
//!
//! The [`Stateful`] trait lets a control save and restore the part of its
//! state that should survive a session (for a radio group: the selection).
//!
//! # Design Invariants
//!
//! 1. **Round-trip fidelity**: `restore_state(save_state())` yields the same
//!    selection. Derived rows are recomputed, not restored.
//! 2. **Graceful version mismatch**: a [`VersionedState`] whose version does
//!    not match `T::state_version()` unpacks to `T::State::default()`.
//! 3. **No side effects**: `save_state` is a pure read; `restore_state` only
//!    mutates `self` and never fires user-change callbacks.
//!
//! # Feature Gate
//!
//! The module is always available; serde derives on [`VersionedState`]
//! require the `state-persistence` feature.

use core::fmt;

/// Identifies one control's persisted state: `(control_type, instance_id)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StateKey {
    pub control_type: &'static str,
    pub instance_id: String,
}

impl StateKey {
    #[must_use]
    pub fn new(control_type: &'static str, id: impl Into<String>) -> Self {
        Self {
            control_type,
            instance_id: id.into(),
        }
    }

    /// Canonical string form: `"control_type::instance_id"`.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.control_type, self.instance_id)
    }
}

/// A control whose user-facing state can be saved and restored.
pub trait Stateful: Sized {
    /// The persisted state. `Default` is the fallback for missing or
    /// mismatched data.
    type State: Default;

    /// Two distinct instances must return distinct keys.
    fn state_key(&self) -> StateKey;

    fn save_state(&self) -> Self::State;

    fn restore_state(&mut self, state: Self::State);

    /// Bump when `State`'s serialized form changes incompatibly.
    fn state_version() -> u32 {
        1
    }
}

/// Version-tagged envelope around persisted state.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VersionedState<S> {
    pub version: u32,
    pub data: S,
}

impl<S> VersionedState<S> {
    /// Pack a control's state with its current version.
    pub fn pack<W: Stateful<State = S>>(widget: &W) -> Self {
        Self {
            version: W::state_version(),
            data: widget.save_state(),
        }
    }

    /// The stored data if the version matches, otherwise `None`.
    pub fn unpack<W: Stateful<State = S>>(self) -> Option<S> {
        (self.version == W::state_version()).then_some(self.data)
    }

    /// The stored data if the version matches, otherwise `S::default()`.
    pub fn unpack_or_default<W: Stateful<State = S>>(self) -> S
    where
        S: Default,
    {
        self.unpack::<W>().unwrap_or_default()
    }
}
