use crate::error::ResolveError;
use crate::model::{YamlElementSelectorUnion, YamlFluentCommand};
use crate::point::parse_point;
use crate::selector::resolve_selector;
use crate::step::{NavigationAction, Step};
use conductor_common::protocol::{
    AssertCommand, BackPressCommand, ConductorCommand, InputTextCommand, LaunchAppCommand,
    ScrollCommand, SwipeCommand, TapOnElementCommand, TapOnPointCommand,
};
use tracing::debug;

impl YamlFluentCommand {
    /// Resolve this step into exactly one command.
    pub fn into_command(self) -> Result<ConductorCommand, ResolveError> {
        resolve_step(Step::try_from(self)?)
    }
}

pub fn resolve_step(step: Step) -> Result<ConductorCommand, ResolveError> {
    debug!("Resolving {} step", step.kind());

    match step {
        Step::LaunchApp(app_id) => Ok(ConductorCommand::LaunchApp(LaunchAppCommand { app_id })),
        Step::TapOn(selector) => tap_command(&selector),
        Step::AssertVisible(selector) => Ok(ConductorCommand::Assert(AssertCommand {
            visible: resolve_selector(&selector)?,
        })),
        Step::InputText(text) => Ok(ConductorCommand::InputText(InputTextCommand { text })),
        Step::Swipe(selector) => swipe_command(&selector),
        Step::Navigation(NavigationAction::Back) => {
            Ok(ConductorCommand::BackPress(BackPressCommand::default()))
        }
        Step::Navigation(NavigationAction::Scroll) => {
            Ok(ConductorCommand::Scroll(ScrollCommand::default()))
        }
    }
}

/// A `point` on the structured form takes precedence over any content
/// fields on the same object.
fn tap_command(tap_on: &YamlElementSelectorUnion) -> Result<ConductorCommand, ResolveError> {
    let structured = tap_on.as_selector();
    let retry_if_no_change = structured
        .and_then(|s| s.retry_tap_if_no_change)
        .unwrap_or(true);
    let wait_until_visible = structured
        .and_then(|s| s.wait_until_visible)
        .unwrap_or(true);

    if let Some(raw) = structured.and_then(|s| s.point.as_deref()) {
        let point = parse_point(raw)?;
        return Ok(ConductorCommand::TapOnPoint(TapOnPointCommand {
            x: point.x,
            y: point.y,
            retry_if_no_change,
            wait_until_visible,
        }));
    }

    Ok(ConductorCommand::TapOnElement(TapOnElementCommand {
        selector: resolve_selector(tap_on)?,
        retry_if_no_change,
        wait_until_visible,
    }))
}

fn swipe_command(swipe: &YamlElementSelectorUnion) -> Result<ConductorCommand, ResolveError> {
    let structured = swipe.as_selector();

    let start = structured
        .and_then(|s| s.start.as_deref())
        .ok_or(ResolveError::MissingStartPoint)?;
    let start_point = parse_point(start)?;

    let end = structured
        .and_then(|s| s.end.as_deref())
        .ok_or(ResolveError::MissingEndPoint)?;
    let end_point = parse_point(end)?;

    Ok(ConductorCommand::Swipe(SwipeCommand {
        start_point,
        end_point,
    }))
}
