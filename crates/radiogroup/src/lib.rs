#![forbid(unsafe_code)]

//! Group radio control public facade crate.
//!
//! ```
//! use radiogroup::prelude::*;
//!
//! let mut control = GroupRadioControl::new();
//! control.set_options(Some(vec![
//!     RadioItem::new("ups", "UPS"),
//!     RadioItem::new("dhl", "DHL"),
//! ]));
//! control.write_value(Some(RadioItem::new("fedex", "FedEx")));
//!
//! // The unknown carrier stays visible, checked and disabled.
//! let last = control.rows().last().unwrap();
//! assert!(last.selected && last.disabled);
//! ```

pub use radiogroup_runtime as runtime;
pub use radiogroup_widgets as widgets;

pub mod prelude {
    pub use radiogroup_runtime::{BindingScope, EventStream, Subscription};
    pub use radiogroup_widgets::{
        FieldStatus, FocusMonitor, FocusOrigin, FormControl, FormFieldControl, GroupRadioControl,
        RadioGroupConfig, RadioGroupEvent, RadioItem, Stateful, ValueAccessor, ViewRow,
    };
}
