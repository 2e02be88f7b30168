use crate::WinnerCount;

/// **VALUE**: Verifies that non-positive counts coerce to one.
///
/// **WHY THIS MATTERS**: The winner count must never be zero or negative. Coercing
/// (instead of rejecting) is what lets the number field never hold an invalid value.
///
/// **BUG THIS CATCHES**: Would catch if the clamp is removed and a zero count reaches
/// the validator, which would start a draw that reveals nobody.
#[test]
fn given_non_positive_counts_when_creating_winner_count_then_clamps_to_one() {
    for raw in [0, -1, -250, i64::MIN] {
        assert_eq!(WinnerCount::new(raw).get(), 1, "count {raw} should clamp to 1");
    }
    assert_eq!(WinnerCount::new(7).get(), 7);
    assert_eq!(WinnerCount::default().get(), 1);
}

/// **VALUE**: Verifies the leading-integer coercion of typed input.
///
/// **BUG THIS CATCHES**: Would catch if trailing junk rejects the whole value or if
/// non-numeric input produces anything other than one.
#[test]
fn given_free_form_input_when_coerced_then_reads_leading_integer_or_one() {
    let cases = [
        ("3", 3),
        ("  12  ", 12),
        ("3abc", 3),
        ("4.9", 4),
        ("+5", 5),
        ("abc", 1),
        ("", 1),
        ("   ", 1),
        ("0", 1),
        ("-4", 1),
        ("-", 1),
        ("1e3", 1),
    ];

    for (input, expected) in cases {
        assert_eq!(
            WinnerCount::from_input(input).get(),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn given_oversized_input_when_coerced_then_saturates_instead_of_overflowing() {
    let count = WinnerCount::from_input("999999999999999999999999999999");

    assert_eq!(count.get(), usize::MAX);
}

#[test]
fn given_winner_counts_when_compared_then_order_by_value() {
    assert!(WinnerCount::new(2) < WinnerCount::new(3));
    assert_eq!(WinnerCount::from(4), WinnerCount::from_input("4"));
    assert_eq!(WinnerCount::new(9).to_string(), "9");
}
