#![forbid(unsafe_code)]

//! Option store: available options, current selection, and the merged rows
//! derived from both.
//!
//! # Design
//!
//! [`OptionStore`] owns two independent state cells, the available list and
//! the selection. Every mutation of either cell (or of the comparator or
//! display function) synchronously recomputes the merged rows with
//! [`merge_options`] and then emits them on
//! [`view_changes`](OptionStore::view_changes).
//!
//! # Invariants
//!
//! 1. The merged rows hold at most one row per distinct key (under the
//!    comparator).
//! 2. A row for the selection exists iff a selection exists.
//! 3. A row is `disabled` iff no available item matches it, which can only
//!    be the orphaned selection; that row always sorts last.
//! 4. A selection is never cleared because the available list changed.
//! 5. `view_changes` fires after the rows are recomputed, so subscribers
//!    read post-mutation state.

use radiogroup_runtime::EventStream;

use crate::item::{CompareFn, DisplayFn, RadioItem, default_compare_fn, default_display_fn};

/// One rendered row of the merged option list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRow<K> {
    /// Key of the underlying item.
    pub key: K,
    /// Label produced by the display function.
    pub label: String,
    /// Whether this row is the current selection.
    pub selected: bool,
    /// Whether the row exists only because it is an orphaned selection.
    pub disabled: bool,
}

/// Merge the available list and selection into view rows.
///
/// Candidates are the available items followed by the selection (if any);
/// candidates are deduplicated keeping the first occurrence, so an available
/// copy always wins over the appended selection.
pub fn merge_options<K: Clone>(
    available: &[RadioItem<K>],
    selection: Option<&RadioItem<K>>,
    compare: &dyn Fn(&RadioItem<K>, &RadioItem<K>) -> bool,
    display: &dyn Fn(&RadioItem<K>) -> String,
) -> Vec<ViewRow<K>> {
    let mut survivors: Vec<&RadioItem<K>> = Vec::with_capacity(available.len() + 1);
    for candidate in available.iter().chain(selection) {
        if !survivors.iter().any(|kept| compare(kept, candidate)) {
            survivors.push(candidate);
        }
    }

    survivors
        .into_iter()
        .map(|item| ViewRow {
            key: item.key.clone(),
            label: display(item),
            selected: selection.is_some_and(|sel| compare(sel, item)),
            disabled: !available.iter().any(|a| compare(a, item)),
        })
        .collect()
}

/// Holds the available options and current selection of one control.
pub struct OptionStore<K> {
    available: Vec<RadioItem<K>>,
    selection: Option<RadioItem<K>>,
    view: Vec<ViewRow<K>>,
    compare: CompareFn<K>,
    display: DisplayFn<K>,
    view_changes: EventStream<Vec<ViewRow<K>>>,
}

impl<K: std::fmt::Debug> std::fmt::Debug for OptionStore<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionStore")
            .field("available", &self.available)
            .field("selection", &self.selection)
            .field("view", &self.view)
            .finish()
    }
}

impl<K> OptionStore<K> {
    /// Close the view stream. Further mutations still recompute rows but
    /// nobody is notified.
    pub fn close(&self) {
        self.view_changes.complete();
    }
}

impl<K: Clone + PartialEq + 'static> Default for OptionStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + PartialEq + 'static> OptionStore<K> {
    /// Create an empty store using key equality and label display.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: Vec::new(),
            selection: None,
            view: Vec::new(),
            compare: default_compare_fn(),
            display: default_display_fn(),
            view_changes: EventStream::new(),
        }
    }

    /// Replace the available list. The selection is kept even when it is no
    /// longer offered.
    pub fn set_available(&mut self, options: impl IntoIterator<Item = RadioItem<K>>) {
        self.available = options.into_iter().collect();
        self.recompute();
    }

    /// Replace the selection; `None` clears it. Membership in the available
    /// list is not checked.
    pub fn set_selection(&mut self, selection: Option<RadioItem<K>>) {
        self.selection = selection;
        self.recompute();
    }

    /// Install a comparator; `None` restores key equality.
    pub fn set_compare_with(&mut self, compare: Option<CompareFn<K>>) {
        self.compare = compare.unwrap_or_else(default_compare_fn);
        self.recompute();
    }

    /// Install a display function; `None` restores the label display.
    pub fn set_display_with(&mut self, display: Option<DisplayFn<K>>) {
        self.display = display.unwrap_or_else(default_display_fn);
        self.recompute();
    }

    /// The current available list, as supplied.
    #[must_use]
    pub fn available(&self) -> &[RadioItem<K>] {
        &self.available
    }

    /// The current selection, orphaned or not.
    #[must_use]
    pub fn selection(&self) -> Option<&RadioItem<K>> {
        self.selection.as_ref()
    }

    /// The merged rows for rendering.
    #[must_use]
    pub fn merged_view(&self) -> &[ViewRow<K>] {
        &self.view
    }

    /// Compare two items with the installed comparator.
    #[must_use]
    pub fn same_option(&self, a: &RadioItem<K>, b: &RadioItem<K>) -> bool {
        (self.compare)(a, b)
    }

    /// Whether `item` matches an entry of the available list.
    #[must_use]
    pub fn is_available(&self, item: &RadioItem<K>) -> bool {
        self.available.iter().any(|a| (self.compare)(a, item))
    }

    /// Whether a selection exists that is not in the available list.
    #[must_use]
    pub fn is_orphaned(&self) -> bool {
        self.selection
            .as_ref()
            .is_some_and(|sel| !self.is_available(sel))
    }

    /// Stream of merged rows, emitted after every recompute.
    #[must_use]
    pub fn view_changes(&self) -> &EventStream<Vec<ViewRow<K>>> {
        &self.view_changes
    }

    fn recompute(&mut self) {
        self.view = merge_options(
            &self.available,
            self.selection.as_ref(),
            self.compare.as_ref(),
            self.display.as_ref(),
        );
        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "radio.options",
            available = self.available.len(),
            rows = self.view.len(),
            orphaned = self.is_orphaned()
        );
        self.view_changes.emit(&self.view);
    }
}
