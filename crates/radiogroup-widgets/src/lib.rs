#![forbid(unsafe_code)]

//! Single-choice radio group control for host form systems.
//!
//! The crate is split along the two halves of the control:
//!
//! - [`store`]: reconciles the offered options with the current selection
//!   into the rows a renderer draws. A selection that is not offered stays
//!   visible as a disabled, checked row.
//! - [`control`]: binds a store to a host form through [`ValueAccessor`] and
//!   [`FormFieldControl`], distinguishing write-in from user choice.
//!
//! [`FormControl`] in [`host`] is a minimal host, useful for tests and for
//! embedding the control without a larger form framework.

pub mod coerce;
pub mod config;
pub mod control;
pub mod error;
pub mod focus;
pub mod form;
pub mod host;
pub mod item;
pub mod stateful;
pub mod store;

pub use coerce::{BooleanInput, coerce_boolean_property};
pub use config::{CONTROL_TYPE, RadioGroupConfig};
pub use control::{GroupRadioControl, RadioGroupEvent, RadioGroupPersist};
pub use error::{ValidationError, ValidationResult};
pub use focus::{FocusMonitor, FocusOrigin, NoopFocusMonitor};
pub use form::{FieldStatus, FormFieldControl, OnChange, OnTouched, ValueAccessor};
pub use host::{FormControl, Validator, validators};
pub use item::{CompareFn, DisplayFn, RadioItem, default_compare, default_display};
pub use stateful::{StateKey, Stateful, VersionedState};
pub use store::{OptionStore, ViewRow, merge_options};
