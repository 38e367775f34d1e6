#![forbid(unsafe_code)]

//! Group radio control.
//!
//! [`GroupRadioControl`] wraps an [`OptionStore`] behind the host
//! form-binding traits ([`ValueAccessor`], [`FormFieldControl`]). The
//! rendering layer reads [`rows`](GroupRadioControl::rows) and the group
//! disabled flag, and reports user choices with
//! [`select_row`](GroupRadioControl::select_row) or
//! [`handle_event`](GroupRadioControl::handle_event).
//!
//! # State machine
//!
//! Per instance: {Pristine, Touched} × {Valid, Invalid} × {Enabled,
//! Disabled}. Pristine → Touched is one-way (first user choice or
//! [`mark_as_touched`](GroupRadioControl::mark_as_touched)). The error
//! state follows the host's validity and touched status, read through
//! [`do_check`](GroupRadioControl::do_check);
//! enablement toggles freely.
//!
//! # Invariants
//!
//! 1. Write-in never invokes the change or touched callbacks.
//! 2. A user choice invokes the change callback, then the touched callback,
//!    exactly once each, after the selection has been stored.
//! 3. Every presentation-relevant mutation emits on `state_changes` after
//!    the mutation is applied.
//! 4. After [`destroy`](GroupRadioControl::destroy), every stream is
//!    completed and the focus monitor has been released exactly once.
//!
//! Callbacks run while the caller holds `&mut` on the control; a callback
//! must not try to borrow the control again.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use radiogroup_runtime::EventStream;

use crate::coerce::{BooleanInput, coerce_boolean_property};
use crate::config::{CONTROL_TYPE, RadioGroupConfig};
use crate::focus::{FocusMonitor, FocusOrigin};
use crate::form::{FieldStatus, FormFieldControl, OnChange, OnTouched, ValueAccessor};
use crate::item::{CompareFn, DisplayFn, RadioItem};
use crate::stateful::{StateKey, Stateful};
use crate::store::{OptionStore, ViewRow};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Input from the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadioGroupEvent<K> {
    /// The user picked a row.
    RowChosen(RadioItem<K>),
    /// Focus entered (`Some`) or left (`None`) the group.
    Focus(Option<FocusOrigin>),
    /// The surrounding container was clicked.
    ContainerClick,
}

/// Persisted selection of a [`GroupRadioControl`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RadioGroupPersist<K> {
    /// The selection at save time, orphaned or not.
    pub selected: Option<RadioItem<K>>,
}

impl<K> Default for RadioGroupPersist<K> {
    fn default() -> Self {
        Self { selected: None }
    }
}

/// A single-choice radio group bound to a host form field.
pub struct GroupRadioControl<K> {
    id: String,
    store: OptionStore<K>,
    placeholder: String,
    required: bool,
    disabled: bool,
    focused: bool,
    touched: bool,
    error_state: bool,
    described_by: String,
    on_change: Option<OnChange<RadioItem<K>>>,
    on_touched: Option<OnTouched>,
    state_changes: EventStream<()>,
    container_click: EventStream<()>,
    focus_monitor: Option<Box<dyn FocusMonitor>>,
    destroyed: bool,
}

impl<K: fmt::Debug> fmt::Debug for GroupRadioControl<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupRadioControl")
            .field("id", &self.id)
            .field("store", &self.store)
            .field("required", &self.required)
            .field("disabled", &self.disabled)
            .field("focused", &self.focused)
            .field("touched", &self.touched)
            .field("error_state", &self.error_state)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}

impl<K: Clone + PartialEq + 'static> Default for GroupRadioControl<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq + 'static> GroupRadioControl<K> {
    /// Create a control with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RadioGroupConfig::default())
    }

    /// Create a control from `config`. Each call allocates a fresh id.
    #[must_use]
    pub fn with_config(config: &RadioGroupConfig) -> Self {
        let n = NEXT_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id: format!("{}-{n}", config.id_prefix),
            store: OptionStore::new(),
            placeholder: config.placeholder.clone(),
            required: config.required,
            disabled: config.disabled,
            focused: false,
            touched: false,
            error_state: false,
            described_by: String::new(),
            on_change: None,
            on_touched: None,
            state_changes: EventStream::new(),
            container_click: EventStream::new(),
            focus_monitor: None,
            destroyed: false,
        }
    }

    /// Hand the control to an external focus tracker. Any previous tracker
    /// is released first.
    #[must_use]
    pub fn with_focus_monitor(mut self, mut monitor: Box<dyn FocusMonitor>) -> Self {
        if let Some(mut previous) = self.focus_monitor.take() {
            previous.stop_monitoring(&self.id);
        }
        monitor.monitor(&self.id, true);
        self.focus_monitor = Some(monitor);
        self
    }

    // ── Options ─────────────────────────────────────────────────────

    /// Replace the offered options. `None` is treated as an empty list.
    pub fn set_options(&mut self, options: Option<Vec<RadioItem<K>>>) {
        self.store.set_available(options.unwrap_or_default());
    }

    /// Install a comparator; `None` restores key equality.
    pub fn set_compare_with(&mut self, compare: Option<CompareFn<K>>) {
        self.store.set_compare_with(compare);
    }

    /// Install a row label function; `None` restores the item label.
    pub fn set_display_with(&mut self, display: Option<DisplayFn<K>>) {
        self.store.set_display_with(display);
    }

    /// Merged rows for the rendering layer.
    #[must_use]
    pub fn rows(&self) -> &[ViewRow<K>] {
        self.store.merged_view()
    }

    /// The underlying option store.
    #[must_use]
    pub fn store(&self) -> &OptionStore<K> {
        &self.store
    }

    // ── User interaction ────────────────────────────────────────────

    /// The user chose `item`.
    ///
    /// Ignored (returns `false`) while the group is disabled or when `item`
    /// is not an offered option; an orphaned row is rendered disabled and
    /// cannot be chosen.
    pub fn select_row(&mut self, item: RadioItem<K>) -> bool {
        if self.disabled || !self.store.is_available(&item) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "radio.select.ignored",
                id = %self.id,
                group_disabled = self.disabled
            );
            return false;
        }

        self.store.set_selection(Some(item));
        self.touched = true;
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "radio.select", id = %self.id);

        if let Some(on_change) = &self.on_change {
            on_change(self.store.selection());
        }
        if let Some(on_touched) = &self.on_touched {
            on_touched();
        }
        self.state_changes.notify();
        true
    }

    /// Dispatch a rendering-layer event. Returns whether it had an effect.
    pub fn handle_event(&mut self, event: RadioGroupEvent<K>) -> bool {
        match event {
            RadioGroupEvent::RowChosen(item) => self.select_row(item),
            RadioGroupEvent::Focus(origin) => {
                self.set_focus_origin(origin);
                true
            }
            RadioGroupEvent::ContainerClick => {
                let enabled = !self.disabled;
                self.on_container_click();
                enabled
            }
        }
    }

    /// Report a focus change from the focus monitor.
    pub fn set_focus_origin(&mut self, origin: Option<FocusOrigin>) {
        self.focused = origin.is_some();
        self.state_changes.notify();
    }

    // ── Host-driven state ───────────────────────────────────────────

    /// Replace the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.state_changes.notify();
    }

    /// Set the required flag, coercing attribute-style input.
    pub fn set_required(&mut self, required: impl Into<BooleanInput>) {
        self.required = coerce_boolean_property(required);
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "radio.state", id = %self.id, required = self.required);
        self.state_changes.notify();
    }

    /// Enable or disable the group, coercing attribute-style input.
    pub fn set_disabled(&mut self, disabled: impl Into<BooleanInput>) {
        self.disabled = coerce_boolean_property(disabled);
        #[cfg(feature = "tracing")]
        tracing::trace!(message = "radio.state", id = %self.id, disabled = self.disabled);
        self.state_changes.notify();
    }

    /// Host-driven Pristine → Touched transition.
    pub fn mark_as_touched(&mut self) {
        self.touched = true;
        self.state_changes.notify();
    }

    /// Whether the user or host has touched the control.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Recompute the error state from the host's field status.
    ///
    /// The field shows an error when the host reports it both invalid and
    /// touched. Touched status is the host's, so a form reset clears it.
    pub fn do_check(&mut self, status: &dyn FieldStatus) {
        self.error_state = status.is_invalid() && status.is_touched();
        self.state_changes.notify();
    }

    /// Space-joined ids set through `set_described_by_ids`.
    #[must_use]
    pub fn described_by(&self) -> &str {
        &self.described_by
    }

    /// Fires when the container is clicked while the group is enabled.
    #[must_use]
    pub fn container_click(&self) -> &EventStream<()> {
        &self.container_click
    }
}

impl<K> GroupRadioControl<K> {
    /// Tear the control down: release focus monitoring and complete every
    /// stream. Idempotent; also runs on drop.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Some(mut monitor) = self.focus_monitor.take() {
            monitor.stop_monitoring(&self.id);
        }
        self.state_changes.complete();
        self.container_click.complete();
        self.store.close();
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "radio.destroy", id = %self.id);
    }

    /// Whether [`destroy`](Self::destroy) has run.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl<K> Drop for GroupRadioControl<K> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<K: Clone + PartialEq + 'static> ValueAccessor<RadioItem<K>> for GroupRadioControl<K> {
    fn write_value(&mut self, value: Option<RadioItem<K>>) {
        self.store.set_selection(value);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "radio.write",
            id = %self.id,
            orphaned = self.store.is_orphaned()
        );
        self.state_changes.notify();
    }

    fn register_on_change(&mut self, on_change: OnChange<RadioItem<K>>) {
        self.on_change = Some(on_change);
    }

    fn register_on_touched(&mut self, on_touched: OnTouched) {
        self.on_touched = Some(on_touched);
    }

    fn set_disabled_state(&mut self, disabled: BooleanInput) {
        self.set_disabled(disabled);
    }
}

impl<K: Clone + PartialEq + 'static> FormFieldControl<RadioItem<K>> for GroupRadioControl<K> {
    fn value(&self) -> Option<&RadioItem<K>> {
        self.store.selection()
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn control_type(&self) -> &str {
        CONTROL_TYPE
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }

    fn focused(&self) -> bool {
        self.focused
    }

    fn empty(&self) -> bool {
        self.store.selection().is_none()
    }

    fn should_label_float(&self) -> bool {
        self.focused || !self.empty()
    }

    fn required(&self) -> bool {
        self.required
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn error_state(&self) -> bool {
        self.error_state
    }

    fn state_changes(&self) -> &EventStream<()> {
        &self.state_changes
    }

    fn set_described_by_ids(&mut self, ids: &[&str]) {
        self.described_by = ids.join(" ");
    }

    fn on_container_click(&self) {
        if !self.disabled {
            self.container_click.notify();
        }
    }
}

impl<K: Clone + PartialEq + 'static> Stateful for GroupRadioControl<K> {
    type State = RadioGroupPersist<K>;

    fn state_key(&self) -> StateKey {
        StateKey::new(CONTROL_TYPE, self.id.clone())
    }

    fn save_state(&self) -> RadioGroupPersist<K> {
        RadioGroupPersist {
            selected: self.store.selection().cloned(),
        }
    }

    fn restore_state(&mut self, state: RadioGroupPersist<K>) {
        self.write_value(state.selected);
    }
}
