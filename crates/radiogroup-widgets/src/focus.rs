#![forbid(unsafe_code)]

//! Focus tracking seam.
//!
//! The control does not observe input devices itself. A host-side
//! [`FocusMonitor`] is told which control to watch when the control is
//! created and released when it is destroyed; focus changes are fed back
//! through `GroupRadioControl::set_focus_origin`.

/// How focus reached the control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusOrigin {
    Touch,
    Mouse,
    Keyboard,
    Program,
}

/// External focus tracker for one or more controls.
pub trait FocusMonitor {
    /// Start tracking the element identified by `id`.
    ///
    /// When `check_children` is set, focus on any descendant counts as focus
    /// on the element.
    fn monitor(&mut self, id: &str, check_children: bool);

    /// Stop tracking `id`. Called exactly once per monitored control.
    fn stop_monitoring(&mut self, id: &str);
}

/// A monitor that tracks nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopFocusMonitor;

impl FocusMonitor for NoopFocusMonitor {
    fn monitor(&mut self, _id: &str, _check_children: bool) {}

    fn stop_monitoring(&mut self, _id: &str) {}
}
