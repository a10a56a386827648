use conductor_yaml::protocol::{ConductorCommand, ElementSelector, Point};
use conductor_yaml::{resolve_value, NavigationAction, ResolveError, Step, YamlFluentCommand};

/// Decodes a YAML step and resolves it.
fn resolve(yaml: &str) -> Result<ConductorCommand, ResolveError> {
    let node: serde_yaml::Value = serde_yaml::from_str(yaml).expect("Invalid YAML in test");
    resolve_value(node)
}

#[test]
fn test_launch_app() {
    let cmd = resolve("launchApp: com.example.app").unwrap();
    let ConductorCommand::LaunchApp(launch) = cmd else {
        panic!("Expected LaunchApp, got {:?}", cmd);
    };
    assert_eq!(launch.app_id, "com.example.app");
}

#[test]
fn test_launch_app_wins_over_everything() {
    let cmd = resolve(
        r#"
launchApp: com.example.app
tapOn: Login
assertVisible: Home
inputText: hello
swipe: { start: "0,0", end: "1,1" }
action: back
"#,
    )
    .unwrap();
    assert!(matches!(cmd, ConductorCommand::LaunchApp(_)));
}

#[test]
fn test_priority_order() {
    let cmd = resolve("{tapOn: Login, assertVisible: Home, action: jump}").unwrap();
    assert!(matches!(cmd, ConductorCommand::TapOnElement(_)));

    let cmd = resolve("{assertVisible: Home, inputText: hi}").unwrap();
    assert!(matches!(cmd, ConductorCommand::Assert(_)));

    let cmd = resolve("{inputText: hi, swipe: Nope}").unwrap();
    assert!(matches!(cmd, ConductorCommand::InputText(_)));

    let cmd = resolve("{swipe: {start: '1,2', end: '3,4'}, action: jump}").unwrap();
    assert!(matches!(cmd, ConductorCommand::Swipe(_)));
}

#[test]
fn test_tap_on_bare_string() {
    let cmd = resolve("tapOn: Login").unwrap();
    let ConductorCommand::TapOnElement(tap) = cmd else {
        panic!("Expected TapOnElement, got {:?}", cmd);
    };
    assert_eq!(tap.selector, ElementSelector::text("Login"));
    assert!(tap.retry_if_no_change);
    assert!(tap.wait_until_visible);
}

#[test]
fn test_tap_on_point_defaults_hints() {
    let cmd = resolve("tapOn: { point: '10, 20' }").unwrap();
    let ConductorCommand::TapOnPoint(tap) = cmd else {
        panic!("Expected TapOnPoint, got {:?}", cmd);
    };
    assert_eq!((tap.x, tap.y), (10, 20));
    assert!(tap.retry_if_no_change);
    assert!(tap.wait_until_visible);
}

#[test]
fn test_tap_on_point_with_hints() {
    let cmd = resolve(
        "tapOn: { point: '1,2', retryTapIfNoChange: false, waitUntilVisible: false }",
    )
    .unwrap();
    let ConductorCommand::TapOnPoint(tap) = cmd else {
        panic!("Expected TapOnPoint, got {:?}", cmd);
    };
    assert!(!tap.retry_if_no_change);
    assert!(!tap.wait_until_visible);
}

#[test]
fn test_tap_point_takes_precedence_over_text() {
    let cmd = resolve("tapOn: { point: '5,6', text: Login, id: btn }").unwrap();
    let ConductorCommand::TapOnPoint(tap) = cmd else {
        panic!("Expected TapOnPoint, got {:?}", cmd);
    };
    assert_eq!((tap.x, tap.y), (5, 6));
}

#[test]
fn test_tap_on_structured_element_with_hints() {
    let cmd = resolve(
        r#"
tapOn:
  text: Submit
  below: Form
  retryTapIfNoChange: false
"#,
    )
    .unwrap();
    let ConductorCommand::TapOnElement(tap) = cmd else {
        panic!("Expected TapOnElement, got {:?}", cmd);
    };
    assert_eq!(tap.selector.text_regex.as_deref(), Some("Submit"));
    assert_eq!(tap.selector.below, Some(Box::new(ElementSelector::text("Form"))));
    assert!(!tap.retry_if_no_change);
    assert!(tap.wait_until_visible);
}

#[test]
fn test_tap_malformed_point() {
    let err = resolve("tapOn: { point: 'ten,20' }").unwrap_err();
    assert!(matches!(err, ResolveError::MalformedPoint(ref raw) if raw == "ten,20"));
    assert!(err.to_string().contains("ten,20"));
}

#[test]
fn test_tap_unknown_selector_type() {
    let err = resolve("tapOn: [Login]").unwrap_err();
    assert!(matches!(err, ResolveError::UnknownSelectorType(_)));
}

#[test]
fn test_assert_visible() {
    let cmd = resolve("assertVisible: { id: 'home_.*', optional: true }").unwrap();
    let ConductorCommand::Assert(assert) = cmd else {
        panic!("Expected Assert, got {:?}", cmd);
    };
    assert_eq!(assert.visible.id_regex.as_deref(), Some("home_.*"));
    assert!(assert.visible.optional);

    let cmd = resolve("assertVisible: Welcome").unwrap();
    let ConductorCommand::Assert(assert) = cmd else {
        panic!("Expected Assert, got {:?}", cmd);
    };
    assert_eq!(assert.visible, ElementSelector::text("Welcome"));
}

#[test]
fn test_assert_visible_ignores_point() {
    let cmd = resolve("assertVisible: { text: Title, point: '1,1' }").unwrap();
    assert!(matches!(cmd, ConductorCommand::Assert(_)));
}

#[test]
fn test_input_text() {
    let cmd = resolve("inputText: hello world").unwrap();
    let ConductorCommand::InputText(input) = cmd else {
        panic!("Expected InputText, got {:?}", cmd);
    };
    assert_eq!(input.text, "hello world");
}

#[test]
fn test_input_text_numeric_scalar() {
    let cmd = resolve("inputText: 1234").unwrap();
    let ConductorCommand::InputText(input) = cmd else {
        panic!("Expected InputText, got {:?}", cmd);
    };
    assert_eq!(input.text, "1234");
}

#[test]
fn test_swipe() {
    let cmd = resolve("swipe: { start: '100, 500', end: '100,100' }").unwrap();
    let ConductorCommand::Swipe(swipe) = cmd else {
        panic!("Expected Swipe, got {:?}", cmd);
    };
    assert_eq!(swipe.start_point, Point::new(100, 500));
    assert_eq!(swipe.end_point, Point::new(100, 100));
}

#[test]
fn test_swipe_missing_end() {
    let err = resolve("swipe: { start: '1,2' }").unwrap_err();
    assert!(matches!(err, ResolveError::MissingEndPoint));
}

#[test]
fn test_swipe_missing_start_checked_first() {
    let err = resolve("swipe: { text: nothing }").unwrap_err();
    assert!(matches!(err, ResolveError::MissingStartPoint));

    let err = resolve("swipe: { end: '1,2' }").unwrap_err();
    assert!(matches!(err, ResolveError::MissingStartPoint));
}

#[test]
fn test_swipe_bare_string_is_not_a_target() {
    let err = resolve("swipe: Somewhere").unwrap_err();
    assert!(matches!(err, ResolveError::MissingStartPoint));
}

#[test]
fn test_swipe_malformed_start_reported_before_missing_end() {
    let err = resolve("swipe: { start: 'x,y' }").unwrap_err();
    assert!(matches!(err, ResolveError::MalformedPoint(ref raw) if raw == "x,y"));
}

#[test]
fn test_actions() {
    assert!(matches!(
        resolve("action: back").unwrap(),
        ConductorCommand::BackPress(_)
    ));
    assert!(matches!(
        resolve("action: scroll").unwrap(),
        ConductorCommand::Scroll(_)
    ));
}

#[test]
fn test_unrecognized_action() {
    let err = resolve("action: jump").unwrap_err();
    assert!(matches!(err, ResolveError::UnrecognizedAction(ref a) if a == "jump"));
    assert_eq!(err.to_string(), "Unknown navigation target: jump");

    // Matching is exact.
    assert!(matches!(
        resolve("action: Back"),
        Err(ResolveError::UnrecognizedAction(_))
    ));
}

#[test]
fn test_no_mapping() {
    let err = resolve("{}").unwrap_err();
    assert!(matches!(err, ResolveError::NoMapping(_)));
    assert_eq!(err.to_string(), "No mapping provided for empty step");
}

#[test]
fn test_no_mapping_names_unrecognized_fields() {
    let err = resolve("{tapOnn: Login, wait: 3}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "No mapping provided for step with unrecognized fields [tapOnn, wait]"
    );
}

#[test]
fn test_null_fields_count_as_absent() {
    let cmd = resolve("{tapOn: null, action: back}").unwrap();
    assert!(matches!(cmd, ConductorCommand::BackPress(_)));
}

#[test]
fn test_decode_error_for_wrong_field_type() {
    let err = resolve("tapOn: { width: wide }").unwrap_err();
    assert!(matches!(err, ResolveError::Decode(_)));

    let err = resolve("- tapOn: Login").unwrap_err();
    assert!(matches!(err, ResolveError::Decode(_)));
}

#[test]
fn test_step_conversion() {
    let cmd = YamlFluentCommand {
        action: Some("scroll".into()),
        ..Default::default()
    };
    let step = Step::try_from(cmd).unwrap();
    assert_eq!(step, Step::Navigation(NavigationAction::Scroll));
    assert_eq!(step.kind(), "action");

    let cmd = YamlFluentCommand {
        launch_app: Some("com.example.app".into()),
        input_text: Some("ignored".into()),
        ..Default::default()
    };
    assert_eq!(
        Step::try_from(cmd).unwrap(),
        Step::LaunchApp("com.example.app".into())
    );
}

#[test]
fn test_into_command_from_record() {
    let cmd = YamlFluentCommand {
        launch_app: Some("com.example.app".into()),
        ..Default::default()
    };
    assert!(matches!(
        cmd.into_command().unwrap(),
        ConductorCommand::LaunchApp(ref l) if l.app_id == "com.example.app"
    ));
}
