#![forbid(unsafe_code)]

//! Construction-time configuration for a group radio control.

/// Type name reported by every group radio control.
pub const CONTROL_TYPE: &str = "app-group-radio-button";

/// Initial settings for a [`GroupRadioControl`](crate::GroupRadioControl).
///
/// With the `state-persistence` feature this (de)serializes, with every
/// field optional, so hosts can keep it next to their form definitions.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RadioGroupConfig {
    /// Prefix for generated instance ids (`<prefix>-<n>`).
    pub id_prefix: String,
    /// Text shown by the surrounding field while nothing is selected.
    pub placeholder: String,
    /// Initial required flag.
    pub required: bool,
    /// Initial disabled flag.
    pub disabled: bool,
}

impl Default for RadioGroupConfig {
    fn default() -> Self {
        Self {
            id_prefix: CONTROL_TYPE.to_owned(),
            placeholder: String::new(),
            required: false,
            disabled: false,
        }
    }
}

impl RadioGroupConfig {
    /// Set the id prefix.
    #[must_use]
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial required flag.
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the initial disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RadioGroupConfig::default();
        assert_eq!(config.id_prefix, "app-group-radio-button");
        assert!(config.placeholder.is_empty());
        assert!(!config.required);
        assert!(!config.disabled);
    }

    #[test]
    fn builder_chain() {
        let config = RadioGroupConfig::default()
            .id_prefix("shipping")
            .placeholder("Carrier")
            .required(true)
            .disabled(true);
        assert_eq!(config.id_prefix, "shipping");
        assert_eq!(config.placeholder, "Carrier");
        assert!(config.required);
        assert!(config.disabled);
    }

    #[cfg(feature = "state-persistence")]
    #[test]
    fn partial_json_fills_defaults() {
        let config: RadioGroupConfig =
            serde_json::from_str(r#"{"placeholder":"Pick one","required":true}"#)
                .expect("valid config json");
        assert_eq!(config.placeholder, "Pick one");
        assert!(config.required);
        assert_eq!(config.id_prefix, CONTROL_TYPE);
    }
}
