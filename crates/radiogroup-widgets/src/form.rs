#![forbid(unsafe_code)]

//! Host form-binding contract.
//!
//! A host form system talks to a control through two capability traits:
//!
//! - [`ValueAccessor`]: the value channel. The host writes values in and
//!   registers callbacks to hear about user-driven changes.
//! - [`FormFieldControl`]: the chrome channel. The surrounding field
//!   (label, error text, accessibility ids) reads presentation state and
//!   re-renders when [`state_changes`](FormFieldControl::state_changes)
//!   fires.
//!
//! Validity is computed by the host and handed back through
//! [`FieldStatus`].

use radiogroup_runtime::EventStream;

use crate::coerce::BooleanInput;

/// Callback invoked with the new value after a user-driven change.
pub type OnChange<V> = Box<dyn Fn(Option<&V>)>;

/// Callback invoked when the user interacts with the control.
pub type OnTouched = Box<dyn Fn()>;

/// Value channel between a host and a control.
pub trait ValueAccessor<V> {
    /// Sync an external value into the control. Must not invoke the
    /// registered change or touched callbacks.
    fn write_value(&mut self, value: Option<V>);

    /// Register the callback for user-driven value changes. Replaces any
    /// previous registration.
    fn register_on_change(&mut self, on_change: OnChange<V>);

    /// Register the callback for user interaction. Replaces any previous
    /// registration.
    fn register_on_touched(&mut self, on_touched: OnTouched);

    /// Enable or disable the control.
    fn set_disabled_state(&mut self, disabled: BooleanInput);
}

/// Host-computed status of the field a control is bound to.
pub trait FieldStatus {
    /// Whether the host's validators reject the current value.
    fn is_invalid(&self) -> bool;

    /// Whether the host considers the field interacted with.
    fn is_touched(&self) -> bool;
}

/// Presentation state the surrounding form field reads.
pub trait FormFieldControl<V> {
    fn value(&self) -> Option<&V>;

    /// Unique element id of this control instance.
    fn id(&self) -> &str;

    /// Stable type name, used by hosts for styling hooks.
    fn control_type(&self) -> &str;

    fn placeholder(&self) -> &str;

    fn focused(&self) -> bool;

    /// Whether there is no value. A value not among the offered options
    /// still counts as non-empty.
    fn empty(&self) -> bool;

    /// Whether the floating label should sit above the control.
    fn should_label_float(&self) -> bool;

    fn required(&self) -> bool;

    fn disabled(&self) -> bool;

    /// Whether the field should display its error chrome.
    fn error_state(&self) -> bool;

    /// Fires after any presentation-relevant state change.
    fn state_changes(&self) -> &EventStream<()>;

    /// Set the ids of elements describing this control.
    fn set_described_by_ids(&mut self, ids: &[&str]);

    /// The host's container around the control was clicked.
    fn on_container_click(&self);
}
