#![forbid(unsafe_code)]

//! Option items and the pluggable equality/display functions.

use std::fmt;
use std::rc::Rc;

/// A selectable option: an opaque identity key plus a display label.
///
/// Items are immutable once handed to a store. Two items are considered the
/// same option when the store's comparator says so, never by address.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct RadioItem<K> {
    /// Identity of the option.
    pub key: K,
    /// Human-readable label.
    pub label: String,
}

impl<K> RadioItem<K> {
    /// Create an item from a key and label.
    #[must_use]
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
        }
    }
}

impl<K> fmt::Display for RadioItem<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Equality predicate used for dedup, selection and orphan detection.
///
/// Must be an equivalence relation (reflexive, symmetric, transitive);
/// merge results are unspecified otherwise.
pub type CompareFn<K> = Rc<dyn Fn(&RadioItem<K>, &RadioItem<K>) -> bool>;

/// Renders an item as the label shown on its row.
pub type DisplayFn<K> = Rc<dyn Fn(&RadioItem<K>) -> String>;

/// Key equality.
#[must_use]
pub fn default_compare<K: PartialEq>(a: &RadioItem<K>, b: &RadioItem<K>) -> bool {
    a.key == b.key
}

/// The item's own string form (its label).
#[must_use]
pub fn default_display<K>(item: &RadioItem<K>) -> String {
    item.to_string()
}

pub(crate) fn default_compare_fn<K: PartialEq + 'static>() -> CompareFn<K> {
    Rc::new(default_compare::<K>)
}

pub(crate) fn default_display_fn<K: 'static>() -> DisplayFn<K> {
    Rc::new(default_display::<K>)
}
