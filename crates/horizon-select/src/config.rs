//! Select configuration.
//!
//! [`SelectConfig`] holds the recognized flags and field paths of a select.
//! It can be built in code with the `with_*` methods or read from loosely
//! typed host attributes with [`SelectAttrs::from_attrs`], which also splits
//! off the attributes that should be forwarded to the native control.
//!
//! # Example
//!
//! ```
//! use horizon_select::config::{Prompt, SelectAttrs, SelectConfig};
//! use serde_json::json;
//!
//! let config = SelectConfig::new()
//!     .with_option_value_path("id")
//!     .with_option_label_path("label")
//!     .with_prompt("Select one");
//! assert_eq!(config.prompt, Prompt::Enabled(Some("Select one".into())));
//!
//! let attrs = json!({
//!     "options": "male female",
//!     "value": "female",
//!     "includeBlank": true,
//!     "name": "gender",
//! });
//! let serde_json::Value::Object(attrs) = attrs else { unreachable!() };
//! let attrs = SelectAttrs::from_attrs(attrs).unwrap();
//! assert_eq!(attrs.config.prompt, Prompt::Enabled(None));
//! assert!(attrs.attributes.get("name").is_some());
//! assert!(attrs.attributes.get("value").is_none());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::model::{FieldPath, OptionValue, OptionsSource};

/// Host attribute keys consumed by the select and never forwarded to the
/// native control.
pub const RESERVED_KEYS: &[&str] = &[
    "value",
    "update",
    "options",
    "paramValue",
    "prompt",
    "promptIsSelectable",
    "includeBlank",
    "optionValuePath",
    "optionLabelPath",
    "optionTargetPath",
    "optionComponent",
    "groupLabelPath",
    "class",
    "classNames",
];

/// Returns true if `key` is consumed by the select itself.
pub fn is_reserved(key: &str) -> bool {
    RESERVED_KEYS.contains(&key)
}

/// The blank pseudo-option shown before all real options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Prompt {
    /// No blank option.
    #[default]
    Disabled,
    /// A blank option, with an optional label.
    Enabled(Option<String>),
}

impl Prompt {
    /// Returns true if a blank option is shown.
    pub fn is_enabled(&self) -> bool {
        matches!(self, Prompt::Enabled(_))
    }

    /// The blank option's label; empty when enabled without one.
    pub fn label(&self) -> Option<&str> {
        match self {
            Prompt::Disabled => None,
            Prompt::Enabled(label) => Some(label.as_deref().unwrap_or("")),
        }
    }
}

impl From<bool> for Prompt {
    fn from(enabled: bool) -> Self {
        if enabled {
            Prompt::Enabled(None)
        } else {
            Prompt::Disabled
        }
    }
}

impl From<&str> for Prompt {
    fn from(label: &str) -> Self {
        Prompt::from(label.to_string())
    }
}

impl From<String> for Prompt {
    fn from(label: String) -> Self {
        if label.is_empty() {
            Prompt::Disabled
        } else {
            Prompt::Enabled(Some(label))
        }
    }
}

impl<'de> Deserialize<'de> for Prompt {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawPrompt {
            Flag(bool),
            Label(String),
        }

        Ok(match Option::<RawPrompt>::deserialize(deserializer)? {
            None => Prompt::Disabled,
            Some(RawPrompt::Flag(flag)) => Prompt::from(flag),
            Some(RawPrompt::Label(label)) => Prompt::from(label),
        })
    }
}

/// Recognized select configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectConfig {
    /// Allow selecting several options.
    #[serde(deserialize_with = "flag")]
    pub multiple: bool,
    /// Field used as each option's native value.
    #[serde(deserialize_with = "path")]
    pub option_value_path: Option<FieldPath>,
    /// Field used as each option's label.
    #[serde(deserialize_with = "path")]
    pub option_label_path: Option<FieldPath>,
    /// Field used to group options.
    #[serde(deserialize_with = "path")]
    pub group_label_path: Option<FieldPath>,
    /// Field reported back instead of the whole option.
    #[serde(deserialize_with = "path")]
    pub option_target_path: Option<FieldPath>,
    /// Blank pseudo-option; `includeBlank` is an alias.
    #[serde(alias = "includeBlank")]
    pub prompt: Prompt,
    /// Whether the blank option stays selectable once a value exists.
    #[serde(deserialize_with = "flag")]
    pub prompt_is_selectable: bool,
}

impl SelectConfig {
    /// Creates a single-select configuration without paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set multi-select mode.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set the identity field.
    pub fn with_option_value_path(mut self, path: &str) -> Self {
        self.option_value_path = FieldPath::parse(path);
        self
    }

    /// Set the label field.
    pub fn with_option_label_path(mut self, path: &str) -> Self {
        self.option_label_path = FieldPath::parse(path);
        self
    }

    /// Set the grouping field.
    pub fn with_group_label_path(mut self, path: &str) -> Self {
        self.group_label_path = FieldPath::parse(path);
        self
    }

    /// Set the projection field.
    pub fn with_option_target_path(mut self, path: &str) -> Self {
        self.option_target_path = FieldPath::parse(path);
        self
    }

    /// Set the blank option (`true`, `false` or a label).
    pub fn with_prompt(mut self, prompt: impl Into<Prompt>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set whether the blank option is selectable.
    pub fn with_prompt_is_selectable(mut self, selectable: bool) -> Self {
        self.prompt_is_selectable = selectable;
        self
    }
}

fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn path<'de, D>(deserializer: D) -> std::result::Result<Option<FieldPath>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|p| FieldPath::parse(&p)))
}

/// Attributes forwarded untouched to the native control.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes(BTreeMap<String, serde_json::Value>);

impl Attributes {
    /// Looks up a forwarded attribute.
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.0.get(key)
    }

    /// Forwards an attribute unless its key is reserved.
    ///
    /// Returns `false` if the key was rejected.
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) -> bool {
        let key = key.into();
        if is_reserved(&key) {
            return false;
        }
        self.0.insert(key, value);
        true
    }

    /// Iterates attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &serde_json::Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of forwarded attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing is forwarded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything a host hands a select, split into its parts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectAttrs {
    /// Recognized configuration.
    pub config: SelectConfig,
    /// The options collection.
    pub options: OptionsSource,
    /// The bound value; a positional `paramValue` wins over `value`.
    pub value: OptionValue,
    /// Attributes to forward to the native control, `multiple` included.
    pub attributes: Attributes,
}

const CONFIG_KEYS: &[&str] = &[
    "multiple",
    "optionValuePath",
    "optionLabelPath",
    "groupLabelPath",
    "optionTargetPath",
    "prompt",
    "includeBlank",
    "promptIsSelectable",
];

const PATH_KEYS: &[&str] = &[
    "optionValuePath",
    "optionLabelPath",
    "groupLabelPath",
    "optionTargetPath",
];

impl SelectAttrs {
    /// Splits raw host attributes into configuration, options, value and
    /// forwarded attributes.
    pub fn from_attrs(mut attrs: serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        for key in PATH_KEYS {
            if let Some(value) = attrs.get(*key)
                && !(value.is_string() || value.is_null())
            {
                return Err(Error::invalid_attribute(*key, "a field path string"));
            }
        }

        let mut config_attrs = serde_json::Map::new();
        for key in CONFIG_KEYS {
            if let Some(value) = attrs.get(*key) {
                config_attrs.insert((*key).to_string(), value.clone());
            }
        }
        // `prompt` wins over its alias when both are given.
        if config_attrs.contains_key("prompt") {
            config_attrs.remove("includeBlank");
        }
        let config: SelectConfig = serde_json::from_value(serde_json::Value::Object(config_attrs))?;

        let options = OptionsSource::from_value(attrs.remove("options").unwrap_or_default());
        let value = match attrs.remove("paramValue") {
            Some(param) => OptionValue::from(param),
            None => OptionValue::from(attrs.remove("value").unwrap_or_default()),
        };

        let mut attributes = Attributes::default();
        for (key, value) in attrs {
            if key != "multiple" {
                attributes.insert(key, value);
            }
        }
        attributes.insert("multiple", serde_json::Value::Bool(config.multiple));

        Ok(Self {
            config,
            options,
            value,
            attributes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_prompt_shapes() {
        let config: SelectConfig = serde_json::from_value(json!({"prompt": "Select one"})).unwrap();
        assert_eq!(config.prompt, Prompt::Enabled(Some("Select one".into())));
        assert_eq!(config.prompt.label(), Some("Select one"));

        let config: SelectConfig = serde_json::from_value(json!({"includeBlank": true})).unwrap();
        assert_eq!(config.prompt, Prompt::Enabled(None));
        assert_eq!(config.prompt.label(), Some(""));

        let config: SelectConfig = serde_json::from_value(json!({"prompt": false})).unwrap();
        assert!(!config.prompt.is_enabled());

        let config: SelectConfig = serde_json::from_value(json!({"prompt": null})).unwrap();
        assert!(!config.prompt.is_enabled());
    }

    #[test]
    fn test_paths_and_flags() {
        let config: SelectConfig = serde_json::from_value(json!({
            "multiple": true,
            "optionValuePath": "id",
            "optionLabelPath": "",
            "promptIsSelectable": null,
        }))
        .unwrap();

        assert!(config.multiple);
        assert_eq!(config.option_value_path.as_ref().map(FieldPath::as_str), Some("id"));
        assert!(config.option_label_path.is_none());
        assert!(!config.prompt_is_selectable);
    }

    #[test]
    fn test_builder() {
        let config = SelectConfig::new()
            .with_multiple(true)
            .with_option_target_path("id")
            .with_prompt(true)
            .with_prompt_is_selectable(true);

        assert!(config.multiple);
        assert!(config.option_target_path.is_some());
        assert_eq!(config.prompt, Prompt::Enabled(None));
        assert!(config.prompt_is_selectable);
    }

    #[test]
    fn test_from_attrs_splits_reserved_keys() {
        let attrs = SelectAttrs::from_attrs(object(json!({
            "options": ["unknown", "male", "female"],
            "value": "female",
            "class": "testing",
            "classNames": "testing",
            "optionComponent": "option-component",
            "name": "gender",
            "data-test": "select",
        })))
        .unwrap();

        assert_eq!(attrs.value, OptionValue::from("female"));
        assert_eq!(attrs.options, OptionsSource::items(vec!["unknown", "male", "female"]));
        assert_eq!(attrs.attributes.get("name"), Some(&json!("gender")));
        assert_eq!(attrs.attributes.get("data-test"), Some(&json!("select")));
        assert_eq!(attrs.attributes.get("multiple"), Some(&json!(false)));
        assert!(attrs.attributes.get("class").is_none());
        assert!(attrs.attributes.get("classNames").is_none());
        assert!(attrs.attributes.get("optionComponent").is_none());
        assert_eq!(attrs.attributes.len(), 3);
    }

    #[test]
    fn test_param_value_wins() {
        let attrs = SelectAttrs::from_attrs(object(json!({
            "paramValue": "male",
            "value": "female",
        })))
        .unwrap();
        assert_eq!(attrs.value, OptionValue::from("male"));
        assert!(attrs.attributes.get("value").is_none());
    }

    #[test]
    fn test_invalid_path_is_rejected() {
        let err = SelectAttrs::from_attrs(object(json!({"optionValuePath": 3}))).unwrap_err();
        assert!(matches!(err, Error::InvalidAttribute { ref key, .. } if key == "optionValuePath"));
    }

    #[test]
    fn test_invalid_flag_is_a_json_error() {
        let err = SelectAttrs::from_attrs(object(json!({"multiple": "yes"}))).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_reserved_keys_cannot_be_forwarded() {
        let mut attributes = Attributes::default();
        assert!(!attributes.insert("optionTargetPath", json!("id")));
        assert!(attributes.insert("disabled", json!(true)));
        assert_eq!(attributes.iter().count(), 1);
    }
}
