//! Requested number of winners.

use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FormatResult};

const MINIMUM_WINNERS: usize = 1;

/// Number of winners to draw. Never less than one.
///
/// Anything that is not a positive integer coerces to one instead of being
/// rejected, so the number field can never hold an invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct WinnerCount(usize);

impl WinnerCount {
    pub fn new(count: i64) -> Self {
        if count < MINIMUM_WINNERS as i64 {
            return Self(MINIMUM_WINNERS);
        }
        Self(usize::try_from(count).unwrap_or(usize::MAX))
    }

    /// Coerce free-form number input.
    ///
    /// Reads an optional sign followed by the leading digits, ignoring
    /// surrounding whitespace and anything after the digits (`"3abc"` is 3).
    /// No digits, zero, or a negative value all give one. Huge values
    /// saturate.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let digits_end = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        let digits = &unsigned[..digits_end];

        if digits.is_empty() || negative {
            return Self(MINIMUM_WINNERS);
        }

        let value = digits
            .bytes()
            .fold(0usize, |acc, digit| {
                acc.saturating_mul(10).saturating_add(usize::from(digit - b'0'))
            });

        Self(value.max(MINIMUM_WINNERS))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WinnerCount {
    fn default() -> Self {
        Self(MINIMUM_WINNERS)
    }
}

impl From<i64> for WinnerCount {
    fn from(count: i64) -> Self {
        Self::new(count)
    }
}

impl Display for WinnerCount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}
