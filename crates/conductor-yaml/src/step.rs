use crate::error::ResolveError;
use crate::model::{YamlElementSelectorUnion, YamlFluentCommand};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A step reduced to the single action it performs.
///
/// Built from [`YamlFluentCommand`] by checking fields in a fixed priority
/// order: launchApp, tapOn, assertVisible, inputText, swipe, action. Fields
/// after the first populated one are ignored.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    LaunchApp(String),
    TapOn(YamlElementSelectorUnion),
    AssertVisible(YamlElementSelectorUnion),
    InputText(String),
    Swipe(YamlElementSelectorUnion),
    Navigation(NavigationAction),
}

impl Step {
    pub fn kind(&self) -> &'static str {
        match self {
            Step::LaunchApp(_) => "launchApp",
            Step::TapOn(_) => "tapOn",
            Step::AssertVisible(_) => "assertVisible",
            Step::InputText(_) => "inputText",
            Step::Swipe(_) => "swipe",
            Step::Navigation(_) => "action",
        }
    }
}

impl TryFrom<YamlFluentCommand> for Step {
    type Error = ResolveError;

    fn try_from(cmd: YamlFluentCommand) -> Result<Self, Self::Error> {
        let YamlFluentCommand {
            tap_on,
            assert_visible,
            action,
            input_text,
            launch_app,
            swipe,
            unrecognized,
        } = cmd;

        if let Some(app_id) = launch_app {
            return Ok(Step::LaunchApp(app_id));
        }
        if let Some(selector) = tap_on {
            return Ok(Step::TapOn(selector));
        }
        if let Some(selector) = assert_visible {
            return Ok(Step::AssertVisible(selector));
        }
        if let Some(text) = input_text {
            return Ok(Step::InputText(text));
        }
        if let Some(selector) = swipe {
            return Ok(Step::Swipe(selector));
        }
        if let Some(action) = action {
            return action.parse().map(Step::Navigation);
        }

        Err(ResolveError::NoMapping(describe_unmapped(&unrecognized)))
    }
}

fn describe_unmapped(unrecognized: &BTreeMap<String, Value>) -> String {
    if unrecognized.is_empty() {
        "empty step".to_string()
    } else {
        let keys: Vec<&str> = unrecognized.keys().map(String::as_str).collect();
        format!("step with unrecognized fields [{}]", keys.join(", "))
    }
}

/// Values accepted by the `action` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    Back,
    Scroll,
}

impl FromStr for NavigationAction {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => Ok(NavigationAction::Back),
            "scroll" => Ok(NavigationAction::Scroll),
            other => Err(ResolveError::UnrecognizedAction(other.to_string())),
        }
    }
}
