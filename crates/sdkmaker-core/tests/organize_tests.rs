use sdkmaker_core::organize::{DEFAULT_CONTROLLER, organize};
use sdkmaker_core::{parse_content, validate};

const USERS_API: &str = include_str!("fixtures/users-api.yaml");

#[test]
fn organizes_fixture_into_controllers() {
    let doc = parse_content(USERS_API).expect("fixture should parse");
    validate::ensure_api_document(&doc).expect("fixture should validate");

    let model = organize(&doc).expect("fixture should organize");

    // Encounter order: UserController first, then SessionController, then
    // the default group for the untagged /ping operation.
    let names: Vec<&String> = model.controllers.keys().collect();
    assert_eq!(names, ["UserController", "SessionController", DEFAULT_CONTROLLER]);

    let users = &model.controllers["UserController"];
    assert_eq!(users.len(), 2, "Controller_create must be dropped");
    assert_eq!(users[0].operation_id, "getUsers");
    assert_eq!(users[1].operation_id, "getUserById");
    assert_eq!(users[1].parameters.len(), 1);
    assert_eq!(users[1].parameters[0].name, "userId");
    assert_eq!(users[1].parameters[0].ty, "number");

    let sessions = &model.controllers["SessionController"];
    assert!(sessions[0].request_body.is_some());

    assert_eq!(model.name, "UserService");
    assert_eq!(model.description, "Manage users and their sessions.");
    assert_eq!(model.version, "1.4.2");
    assert_eq!(model.base_url, "https://users.example.com/v1");
}

#[test]
fn organizing_twice_is_deterministic() {
    let doc = parse_content(USERS_API).unwrap();
    let first = organize(&doc).unwrap();
    let second = organize(&doc).unwrap();

    let first_ids: Vec<Vec<&str>> = first
        .controllers
        .values()
        .map(|ops| ops.iter().map(|op| op.operation_id.as_str()).collect())
        .collect();
    let second_ids: Vec<Vec<&str>> = second
        .controllers
        .values()
        .map(|ops| ops.iter().map(|op| op.operation_id.as_str()).collect())
        .collect();

    assert_eq!(first_ids, second_ids);
    assert_eq!(
        first.controllers.keys().collect::<Vec<_>>(),
        second.controllers.keys().collect::<Vec<_>>()
    );
}

#[test]
fn no_retained_operation_carries_the_internal_marker() {
    let doc = parse_content(USERS_API).unwrap();
    let model = organize(&doc).unwrap();

    for ops in model.controllers.values() {
        for op in ops {
            assert!(!op.operation_id.is_empty());
            assert!(!op.operation_id.contains("Controller_"));
        }
    }
}
