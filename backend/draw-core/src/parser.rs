//! Turns the free-form names text into a [`NameList`].
//!
//! Commas and line breaks are both plain separators. Each segment is trimmed
//! and blank segments are dropped; duplicates and order are kept.

use models::{NameList, trim_name};

use std::sync::OnceLock;

use regex::Regex;

const NAME_SEPARATOR_PATTERN: &str = r"[,\r\n]";

static NAME_SEPARATOR_REGEX: OnceLock<Regex> = OnceLock::new();

pub(crate) fn get_separator_regex() -> &'static Regex {
    NAME_SEPARATOR_REGEX
        .get_or_init(|| Regex::new(NAME_SEPARATOR_PATTERN).expect("valid regex pattern"))
}

/// Parse raw input into the ordered candidate list. Never fails.
pub fn parse_names(text: &str) -> NameList {
    NameList::from_segments(get_separator_regex().split(text))
}

/// Number of candidates in `text`, for the live name counter.
pub fn count_names(text: &str) -> usize {
    get_separator_regex()
        .split(text)
        .filter(|segment| !trim_name(segment).is_empty())
        .count()
}
