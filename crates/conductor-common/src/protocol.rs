use serde::{Deserialize, Serialize};

/// Execution-ready command handed to the device driver.
///
/// Exactly one variant is produced per authored step. Every field present on a
/// variant is meaningful; there are no optional shapes left to interpret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ConductorCommand {
    LaunchApp(LaunchAppCommand),
    TapOnPoint(TapOnPointCommand),
    TapOnElement(TapOnElementCommand),
    Assert(AssertCommand),
    InputText(InputTextCommand),
    Swipe(SwipeCommand),
    BackPress(BackPressCommand),
    Scroll(ScrollCommand),
}

impl ConductorCommand {
    /// Short name of the variant, used in logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            ConductorCommand::LaunchApp(_) => "launch_app",
            ConductorCommand::TapOnPoint(_) => "tap_on_point",
            ConductorCommand::TapOnElement(_) => "tap_on_element",
            ConductorCommand::Assert(_) => "assert",
            ConductorCommand::InputText(_) => "input_text",
            ConductorCommand::Swipe(_) => "swipe",
            ConductorCommand::BackPress(_) => "back_press",
            ConductorCommand::Scroll(_) => "scroll",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchAppCommand {
    pub app_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapOnPointCommand {
    pub x: i32,
    pub y: i32,
    pub retry_if_no_change: bool,
    pub wait_until_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapOnElementCommand {
    pub selector: ElementSelector,
    pub retry_if_no_change: bool,
    pub wait_until_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertCommand {
    pub visible: ElementSelector,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputTextCommand {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeCommand {
    pub start_point: Point,
    pub end_point: Point,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BackPressCommand {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScrollCommand {}

/// Screen coordinate in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Normalized description of the element(s) a command targets.
///
/// Relations are owned children, so a selector is a finite tree built once and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementSelector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub below: Option<Box<ElementSelector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub above: Option<Box<ElementSelector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_of: Option<Box<ElementSelector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_of: Option<Box<ElementSelector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_child: Option<Box<ElementSelector>>,
    #[serde(default)]
    pub optional: bool,
}

impl ElementSelector {
    /// Selector matching on visible text only.
    pub fn text(pattern: impl Into<String>) -> Self {
        Self {
            text_regex: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// True when the selector carries at least one spatial or containment child.
    pub fn has_relations(&self) -> bool {
        self.below.is_some()
            || self.above.is_some()
            || self.left_of.is_some()
            || self.right_of.is_some()
            || self.contains_child.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSelector {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub tolerance: Option<i32>,
}
