#![forbid(unsafe_code)]

//! Reference host: a single form field bound to any [`ValueAccessor`].
//!
//! [`FormControl`] owns the field's model value, its touched/dirty flags and
//! its validators. Attaching it to an accessor writes the model value in and
//! registers callbacks that keep the model in sync with user changes.
//!
//! # Invariants
//!
//! 1. `set_value` reaches the accessor as a write-in, never as a user change.
//! 2. `dirty` becomes true only through the accessor's change callback.
//! 3. A disabled field is neither valid nor invalid: `is_invalid` is false.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{ValidationError, ValidationResult};
use crate::form::{FieldStatus, ValueAccessor};

/// Check applied to the field's value.
pub type Validator<V> = Rc<dyn Fn(Option<&V>) -> ValidationResult>;

/// Built-in validators.
pub mod validators {
    use std::rc::Rc;

    use super::Validator;
    use crate::error::ValidationError;

    /// Reject an absent value.
    #[must_use]
    pub fn required<V: 'static>() -> Validator<V> {
        Rc::new(|value: Option<&V>| {
            if value.is_some() {
                Ok(())
            } else {
                Err(ValidationError::Required)
            }
        })
    }
}

struct FieldState<V> {
    value: Option<V>,
    touched: bool,
    dirty: bool,
    disabled: bool,
}

/// A form field model bound to at most one accessor.
pub struct FormControl<V> {
    state: Rc<RefCell<FieldState<V>>>,
    validators: Vec<Validator<V>>,
    accessor: Option<Rc<RefCell<dyn ValueAccessor<V>>>>,
}

impl<V: fmt::Debug> fmt::Debug for FormControl<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("FormControl")
            .field("value", &state.value)
            .field("touched", &state.touched)
            .field("dirty", &state.dirty)
            .field("disabled", &state.disabled)
            .field("validators", &self.validators.len())
            .field("attached", &self.accessor.is_some())
            .finish()
    }
}

impl<V: Clone + 'static> FormControl<V> {
    /// Create a pristine, enabled field holding `initial`.
    #[must_use]
    pub fn new(initial: Option<V>) -> Self {
        Self {
            state: Rc::new(RefCell::new(FieldState {
                value: initial,
                touched: false,
                dirty: false,
                disabled: false,
            })),
            validators: Vec::new(),
            accessor: None,
        }
    }

    /// Add a validator.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator<V>) -> Self {
        self.validators.push(validator);
        self
    }

    /// Bind to `accessor`, replacing any previous binding.
    ///
    /// The previous accessor is detached first. The current model value is
    /// written in and the accessor's callbacks are pointed at this field.
    pub fn attach(&mut self, accessor: Rc<RefCell<dyn ValueAccessor<V>>>) {
        self.detach();
        let (value, disabled) = {
            let state = self.state.borrow();
            (state.value.clone(), state.disabled)
        };
        {
            let mut acc = accessor.borrow_mut();
            acc.write_value(value);
            if disabled {
                acc.set_disabled_state(true.into());
            }

            let on_change_state = Rc::clone(&self.state);
            acc.register_on_change(Box::new(move |value: Option<&V>| {
                let mut state = on_change_state.borrow_mut();
                state.value = value.cloned();
                state.dirty = true;
            }));

            let on_touched_state = Rc::clone(&self.state);
            acc.register_on_touched(Box::new(move || {
                on_touched_state.borrow_mut().touched = true;
            }));
        }
        self.accessor = Some(accessor);
    }

    /// Drop the accessor binding. The accessor's callbacks are replaced with
    /// no-ops so later user choices no longer reach this field.
    pub fn detach(&mut self) {
        if let Some(accessor) = self.accessor.take() {
            let mut acc = accessor.borrow_mut();
            acc.register_on_change(Box::new(|_: Option<&V>| {}));
            acc.register_on_touched(Box::new(|| {}));
        }
    }

    /// Replace the model value and write it into the accessor.
    pub fn set_value(&self, value: Option<V>) {
        self.state.borrow_mut().value = value.clone();
        if let Some(accessor) = &self.accessor {
            accessor.borrow_mut().write_value(value);
        }
    }

    /// Current model value.
    #[must_use]
    pub fn value(&self) -> Option<V> {
        self.state.borrow().value.clone()
    }

    /// Errors reported by the validators for the current value.
    #[must_use]
    pub fn errors(&self) -> Vec<ValidationError> {
        let state = self.state.borrow();
        self.validators
            .iter()
            .filter_map(|validator| validator(state.value.as_ref()).err())
            .collect()
    }

    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.state.borrow().touched
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.state.borrow().dirty
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    pub fn mark_as_touched(&self) {
        self.state.borrow_mut().touched = true;
    }

    pub fn disable(&self) {
        self.set_disabled(true);
    }

    pub fn enable(&self) {
        self.set_disabled(false);
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
        if let Some(accessor) = &self.accessor {
            accessor.borrow_mut().set_disabled_state(disabled.into());
        }
    }
}

impl<V: Clone + 'static> FieldStatus for FormControl<V> {
    fn is_invalid(&self) -> bool {
        !self.is_disabled() && !self.errors().is_empty()
    }

    fn is_touched(&self) -> bool {
        FormControl::is_touched(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::{BooleanInput, coerce_boolean_property};
    use crate::form::{OnChange, OnTouched};

    /// Minimal accessor that records what the host did to it.
    #[derive(Default)]
    struct Probe {
        written: Vec<Option<u8>>,
        disabled: bool,
        on_change: Option<OnChange<u8>>,
        on_touched: Option<OnTouched>,
    }

    impl Probe {
        fn user_picks(&self, value: u8) {
            if let Some(cb) = &self.on_change {
                cb(Some(&value));
            }
            if let Some(cb) = &self.on_touched {
                cb();
            }
        }
    }

    impl ValueAccessor<u8> for Probe {
        fn write_value(&mut self, value: Option<u8>) {
            self.written.push(value);
        }

        fn register_on_change(&mut self, on_change: OnChange<u8>) {
            self.on_change = Some(on_change);
        }

        fn register_on_touched(&mut self, on_touched: OnTouched) {
            self.on_touched = Some(on_touched);
        }

        fn set_disabled_state(&mut self, disabled: BooleanInput) {
            self.disabled = coerce_boolean_property(disabled);
        }
    }

    #[test]
    fn attach_writes_initial_value() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::new(Some(3u8));
        field.attach(probe.clone());
        assert_eq!(probe.borrow().written, vec![Some(3)]);
        assert!(!field.is_dirty());
    }

    #[test]
    fn set_value_is_written_in() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::<u8>::new(None);
        field.attach(probe.clone());
        field.set_value(Some(9));
        assert_eq!(probe.borrow().written, vec![None, Some(9)]);
        assert_eq!(field.value(), Some(9));
        assert!(!field.is_dirty());
        assert!(!field.is_touched());
    }

    #[test]
    fn user_change_updates_model() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::<u8>::new(None);
        field.attach(probe.clone());
        probe.borrow().user_picks(4);
        assert_eq!(field.value(), Some(4));
        assert!(field.is_dirty());
        assert!(field.is_touched());
    }

    #[test]
    fn required_validator() {
        let field = FormControl::<u8>::new(None).with_validator(validators::required());
        assert_eq!(field.errors(), vec![ValidationError::Required]);
        assert!(field.is_invalid());

        field.set_value(Some(1));
        assert!(field.errors().is_empty());
        assert!(!field.is_invalid());
    }

    #[test]
    fn custom_validator() {
        let odd_only: Validator<u8> = Rc::new(|value: Option<&u8>| match value {
            Some(v) if v % 2 == 0 => Err(ValidationError::invalid("even")),
            _ => Ok(()),
        });
        let field = FormControl::new(Some(2u8)).with_validator(odd_only);
        assert_eq!(field.errors(), vec![ValidationError::invalid("even")]);
    }

    #[test]
    fn disabled_field_is_not_invalid() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::<u8>::new(None).with_validator(validators::required());
        field.attach(probe.clone());
        field.disable();
        assert!(probe.borrow().disabled);
        assert!(!field.is_invalid());

        field.enable();
        assert!(!probe.borrow().disabled);
        assert!(field.is_invalid());
    }

    #[test]
    fn attach_propagates_disabled() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::<u8>::new(None);
        field.disable();
        field.attach(probe.clone());
        assert!(probe.borrow().disabled);
    }

    #[test]
    fn detach_stops_write_in() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::new(Some(1u8));
        field.attach(probe.clone());
        field.detach();
        field.set_value(Some(2));
        assert_eq!(probe.borrow().written, vec![Some(1)]);
        assert!(format!("{field:?}").contains("attached: false"));
    }

    #[test]
    fn detach_silences_user_changes() {
        let probe = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::new(Some(1u8));
        field.attach(probe.clone());
        field.detach();

        probe.borrow().user_picks(7);
        assert_eq!(field.value(), Some(1));
        assert!(!field.is_dirty());
        assert!(!field.is_touched());
    }

    #[test]
    fn reattach_releases_previous_accessor() {
        let first = Rc::new(RefCell::new(Probe::default()));
        let second = Rc::new(RefCell::new(Probe::default()));
        let mut field = FormControl::<u8>::new(None);
        field.attach(first.clone());
        field.attach(second.clone());

        first.borrow().user_picks(3);
        assert_eq!(field.value(), None);
        second.borrow().user_picks(4);
        assert_eq!(field.value(), Some(4));
    }
}
