//! Loosely-typed step shapes as authored in flow files.
//!
//! These mirror what a script writer is allowed to put in a step. Nothing here
//! is validated beyond scalar types; deciding what a step means is the job of
//! [`crate::step`] and [`crate::command`].

use crate::error::ResolveError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::collections::BTreeMap;

/// One authored step. At most one action field is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YamlFluentCommand {
    #[serde(default)]
    pub tap_on: Option<YamlElementSelectorUnion>,
    #[serde(default)]
    pub assert_visible: Option<YamlElementSelectorUnion>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub action: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub input_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub launch_app: Option<String>,
    #[serde(default)]
    pub swipe: Option<YamlElementSelectorUnion>,
    /// Keys that are not part of the step vocabulary. Kept only for error messages.
    #[serde(flatten)]
    pub unrecognized: BTreeMap<String, Value>,
}

impl YamlFluentCommand {
    /// Decode a generic YAML node into a step record.
    pub fn from_value(node: Value) -> Result<Self, ResolveError> {
        Ok(serde_yaml::from_value(node)?)
    }
}

/// Either a bare text pattern or a structured selector object.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlElementSelectorUnion {
    /// `tapOn: "Login"`; scalars are taken as text patterns.
    Text(String),
    Selector(Box<YamlElementSelector>),
    /// Any other node kind (sequence, tagged value). Rejected at resolution time.
    Unsupported(Value),
}

impl YamlElementSelectorUnion {
    /// The structured variant, if this is one.
    pub fn as_selector(&self) -> Option<&YamlElementSelector> {
        match self {
            YamlElementSelectorUnion::Selector(selector) => Some(selector),
            _ => None,
        }
    }
}

impl From<YamlElementSelector> for YamlElementSelectorUnion {
    fn from(selector: YamlElementSelector) -> Self {
        YamlElementSelectorUnion::Selector(Box::new(selector))
    }
}

impl<'de> Deserialize<'de> for YamlElementSelectorUnion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;
        match node {
            Value::Mapping(map) => serde_yaml::from_value::<YamlElementSelector>(Value::Mapping(map))
                .map(|selector| YamlElementSelectorUnion::Selector(Box::new(selector)))
                .map_err(D::Error::custom),
            other => match scalar_to_string(&other) {
                Some(text) => Ok(YamlElementSelectorUnion::Text(text)),
                None => Ok(YamlElementSelectorUnion::Unsupported(other)),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YamlElementSelector {
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub tolerance: Option<i32>,
    #[serde(default)]
    pub below: Option<YamlElementSelectorUnion>,
    #[serde(default)]
    pub above: Option<YamlElementSelectorUnion>,
    #[serde(default)]
    pub left_of: Option<YamlElementSelectorUnion>,
    #[serde(default)]
    pub right_of: Option<YamlElementSelectorUnion>,
    #[serde(default)]
    pub contains_child: Option<YamlElementSelectorUnion>,
    #[serde(default)]
    pub optional: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub point: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub end: Option<String>,
    #[serde(default)]
    pub retry_tap_if_no_change: Option<bool>,
    #[serde(default)]
    pub wait_until_visible: Option<bool>,
}

fn scalar_to_string(node: &Value) -> Option<String> {
    match node {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accepts any YAML scalar for a text field, so `inputText: 1234` reads as `"1234"`.
fn deserialize_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let node: Option<Value> = Option::deserialize(deserializer)?;
    match node {
        None | Some(Value::Null) => Ok(None),
        Some(node) => scalar_to_string(&node).map(Some).ok_or_else(|| {
            D::Error::custom(format!("expected a scalar, found {}", describe_node(&node)))
        }),
    }
}

/// Compact YAML rendering of a node for error messages.
pub(crate) fn describe_node(node: &Value) -> String {
    match serde_yaml::to_string(node) {
        Ok(s) => s.trim_end().replace('\n', " "),
        Err(_) => format!("{:?}", node),
    }
}
