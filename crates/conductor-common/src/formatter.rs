use crate::protocol::{ConductorCommand, ElementSelector, Point, SizeSelector};

/// Render a resolved command as a single human-readable line.
pub fn format_command(cmd: &ConductorCommand) -> String {
    match cmd {
        ConductorCommand::LaunchApp(c) => format!("launchApp {}", c.app_id),
        ConductorCommand::TapOnPoint(c) => format!(
            "tapOn point {}{}",
            format_point(&Point::new(c.x, c.y)),
            format_hints(c.retry_if_no_change, c.wait_until_visible)
        ),
        ConductorCommand::TapOnElement(c) => format!(
            "tapOn {}{}",
            format_selector(&c.selector),
            format_hints(c.retry_if_no_change, c.wait_until_visible)
        ),
        ConductorCommand::Assert(c) => format!("assertVisible {}", format_selector(&c.visible)),
        ConductorCommand::InputText(c) => format!("inputText {:?}", c.text),
        ConductorCommand::Swipe(c) => format!(
            "swipe {} -> {}",
            format_point(&c.start_point),
            format_point(&c.end_point)
        ),
        ConductorCommand::BackPress(_) => "back".to_string(),
        ConductorCommand::Scroll(_) => "scroll".to_string(),
    }
}

pub fn format_point(point: &Point) -> String {
    format!("({}, {})", point.x, point.y)
}

/// Render a selector tree, e.g. `"Login" id="btn_.*" below("Header") {optional}`.
pub fn format_selector(selector: &ElementSelector) -> String {
    let mut parts = Vec::new();

    if let Some(text) = &selector.text_regex {
        parts.push(format!("{:?}", text));
    }
    if let Some(id) = &selector.id_regex {
        parts.push(format!("id={:?}", id));
    }
    if let Some(size) = &selector.size {
        parts.push(format_size(size));
    }

    let relations = [
        ("below", &selector.below),
        ("above", &selector.above),
        ("leftOf", &selector.left_of),
        ("rightOf", &selector.right_of),
        ("containsChild", &selector.contains_child),
    ];
    for (name, child) in relations {
        if let Some(child) = child {
            parts.push(format!("{}({})", name, format_selector(child)));
        }
    }

    if selector.optional {
        parts.push("{optional}".to_string());
    }

    if parts.is_empty() {
        "<any>".to_string()
    } else {
        parts.join(" ")
    }
}

fn format_size(size: &SizeSelector) -> String {
    let dim = |v: Option<i32>| v.map(|v| v.to_string()).unwrap_or_else(|| "*".to_string());
    let mut out = format!("size={}x{}", dim(size.width), dim(size.height));
    if let Some(tolerance) = size.tolerance {
        out.push_str(&format!("~{}", tolerance));
    }
    out
}

fn format_hints(retry_if_no_change: bool, wait_until_visible: bool) -> String {
    let mut flags = Vec::new();
    if !retry_if_no_change {
        flags.push("no-retry");
    }
    if !wait_until_visible {
        flags.push("no-wait");
    }

    if flags.is_empty() {
        String::new()
    } else {
        format!(" {{{}}}", flags.join(", "))
    }
}
