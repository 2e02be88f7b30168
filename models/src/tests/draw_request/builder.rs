use crate::{DrawRequestBuilder, ModelError, NameList, WinnerCount};

use uuid::Uuid;

fn names(raw: &[&str]) -> NameList {
    NameList::from_segments(raw.iter().copied())
}

/// **VALUE**: Verifies that a complete builder produces a snapshot of its inputs.
///
/// **BUG THIS CATCHES**: Would catch if the builder drops or reorders names, or
/// ignores an explicitly supplied id.
#[test]
fn given_valid_inputs_when_building_draw_request_then_snapshot_matches_inputs() {
    // GIVEN: Three names, two winners, a fixed id
    let id = Uuid::new_v4();
    let builder = DrawRequestBuilder::default()
        .with_id(id)
        .with_names(names(&["A", "B", "C"]))
        .with_winner_count(WinnerCount::new(2));

    // WHEN: Building
    let request = builder.build().unwrap();

    // THEN: The snapshot carries exactly what was supplied
    assert_eq!(request.id(), id);
    assert_eq!(request.names().as_slice(), ["A", "B", "C"]);
    assert_eq!(request.winner_count().get(), 2);
}

#[test]
fn given_no_id_when_building_then_each_request_gets_a_fresh_id() {
    let first = DrawRequestBuilder::default()
        .with_names(names(&["A"]))
        .with_winner_count(WinnerCount::default())
        .build()
        .unwrap();
    let second = DrawRequestBuilder::default()
        .with_names(names(&["A"]))
        .with_winner_count(WinnerCount::default())
        .build()
        .unwrap();

    assert_ne!(first.id(), second.id());
}

/// **VALUE**: Verifies the builder refuses a snapshot with more winners than names.
///
/// **WHY THIS MATTERS**: The selector assumes `count <= names.len()`. A request that
/// breaks this must never exist, even if a caller skips the validator.
#[test]
fn given_more_winners_than_names_when_building_then_returns_validation_error() {
    let result = DrawRequestBuilder::default()
        .with_names(names(&["A", "B"]))
        .with_winner_count(WinnerCount::new(3))
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Winner count 3 exceeds 2 available names");
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn given_missing_names_when_building_then_returns_validation_error() {
    let result = DrawRequestBuilder::default()
        .with_winner_count(WinnerCount::new(1))
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => assert_eq!(message, "Names are required"),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn given_missing_winner_count_when_building_then_returns_validation_error() {
    let result = DrawRequestBuilder::default()
        .with_names(names(&["A"]))
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Winner count is required");
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}
