use draw_core::error::{CoreError, SessionError};
use draw_core::validator::DrawRejection;

use models::{DrawRequestBuilder, ErrorLocation, NameList, WinnerCount};

use std::error::Error;
use std::panic::Location;

/// **VALUE**: Verifies `SessionError::Rejected` renders the rejection and the location.
///
/// **WHY THIS MATTERS**: Rejections are logged before being shown to the user; the log
/// line must say which rule refused the draw and where.
#[test]
fn given_rejected_error_when_formatted_then_includes_rejection_and_location() {
    // GIVEN: A TooManyWinners rejection
    let err = SessionError::Rejected {
        rejection: DrawRejection::TooManyWinners {
            requested: 3,
            available: 2,
        },
        location: ErrorLocation::from(Location::caller()),
    };

    // WHEN: Formatting
    let rendered = err.to_string();

    // THEN: Kind, details and file are present, and the rejection is recoverable
    assert!(rendered.starts_with("Draw Rejected: cannot select 3 winners from 2 names ["));
    assert!(rendered.contains("session.rs"));
    assert_eq!(
        err.rejection(),
        Some(DrawRejection::TooManyWinners {
            requested: 3,
            available: 2
        })
    );
}

#[test]
fn given_non_rejection_errors_when_asked_for_rejection_then_none() {
    let err = SessionError::ActorStopped {
        message: "gone".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(err.rejection(), None);
    assert!(err.to_string().starts_with("Session Actor Stopped Error: gone ["));
}

/// **VALUE**: Verifies a builder failure converts into `SessionError::Request` with its source.
///
/// **BUG THIS CATCHES**: Would catch the `From<ModelError>` conversion losing the
/// underlying validation message.
#[test]
fn given_model_error_when_converted_then_request_error_keeps_source() {
    let model_err = DrawRequestBuilder::default()
        .with_names(NameList::empty())
        .with_winner_count(WinnerCount::default())
        .build()
        .unwrap_err();

    let err = SessionError::from(model_err);

    assert!(matches!(err, SessionError::Request { .. }));
    let source = err.source().expect("Request error should expose its source");
    assert!(source.to_string().contains("Names cannot be empty"));
}

#[test]
fn given_session_error_when_wrapped_in_core_error_then_display_is_transparent() {
    let session_err = SessionError::DrawInProgress {
        message: "busy".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };
    let expected = session_err.to_string();

    let core: CoreError = session_err.into();

    assert_eq!(core.to_string(), expected);
}
