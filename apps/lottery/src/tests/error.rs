// Unit tests for error module
// Tests serialization, exit codes and conversion from draw-core errors

use crate::error::LotteryError;

use draw_core::error::CoreError;
use draw_core::error::config::ConfigError;

use models::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Tests that errors can be serialized.
///
/// **WHY THIS MATTERS**: Errors are tagged with `type`/`data` so a caller can
/// tell a refused draw apart from an infrastructure failure without parsing text.
///
/// **BUG THIS CATCHES**: Would catch adding a non-serializable field to a variant.
#[test]
fn given_lottery_error_when_serialized_then_contains_variant_and_message() {
    // GIVEN: A rejection
    let err = LotteryError::Rejected {
        message: String::from("Please enter at least one name!"),
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Serializing to JSON
    let json = serde_json::to_string(&err).unwrap();

    // THEN: Tag, message and location are present
    assert!(json.contains(r#""type":"Rejected""#));
    assert!(json.contains("Please enter at least one name!"));
    assert!(json.contains("error.rs"));
}

#[test]
fn given_rejection_when_exit_code_requested_then_differs_from_failures() {
    let location = ErrorLocation::from(Location::caller());
    let rejected = LotteryError::Rejected {
        message: String::new(),
        location,
    };
    let failed = LotteryError::Lottery {
        message: String::new(),
        location,
    };

    assert_eq!(rejected.exit_code(), 2);
    assert_eq!(failed.exit_code(), 1);
}

/// **VALUE**: Verifies core errors keep their full rendered message.
///
/// **BUG THIS CATCHES**: Would catch the conversion dropping the underlying
/// kind and location, leaving only an opaque "Core Error".
#[test]
fn given_core_error_when_converted_then_message_is_preserved() {
    // GIVEN: A config validation failure wrapped in CoreError
    let core = CoreError::from(ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason: "Invalid tick interval: 0ms (must be 1-60000)".to_string(),
    });
    let expected = core.to_string();

    // WHEN: Converting
    let err = LotteryError::from(core);

    // THEN: The Core variant carries the underlying text
    match err {
        LotteryError::Core { message, .. } => assert_eq!(message, expected),
        other => panic!("Expected Core variant, got {other:?}"),
    }
}
