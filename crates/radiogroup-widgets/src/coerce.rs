#![forbid(unsafe_code)]

//! Boolean coercion for host-supplied flags.
//!
//! Hosts may pass flags as real booleans, as attribute-style strings, or not
//! at all. The rule mirrors attribute semantics: absent is `false`, the
//! string `"false"` is `false`, and anything else that is present (including
//! the empty string) is `true`.

/// A flag value as supplied by a host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BooleanInput {
    /// A real boolean, used as is.
    Bool(bool),
    /// An attribute value; only `"false"` is false.
    Text(String),
    /// No value supplied; false.
    Absent,
}

impl From<bool> for BooleanInput {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for BooleanInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for BooleanInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T: Into<BooleanInput>> From<Option<T>> for BooleanInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Coerce a host flag to `bool`.
#[must_use]
pub fn coerce_boolean_property(value: impl Into<BooleanInput>) -> bool {
    match value.into() {
        BooleanInput::Bool(b) => b,
        BooleanInput::Text(text) => text != "false",
        BooleanInput::Absent => false,
    }
}
