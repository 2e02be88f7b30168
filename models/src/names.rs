//! Candidate and winner name sequences.

use serde::Serialize;

/// Byte-order mark; editors prepend it to UTF-8 files and it renders as nothing.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Strip surrounding whitespace and byte-order marks from one segment.
pub fn trim_name(segment: &str) -> &str {
    segment.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Ordered list of draw candidates.
///
/// Every element is trimmed and non-empty. Duplicates are kept: two equal
/// strings are two separate candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a list from raw segments, trimming each one and dropping the
    /// segments that are blank after trimming. Order is preserved.
    pub fn from_segments<'a, I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names = segments
            .into_iter()
            .map(trim_name)
            .filter(|segment| !segment.is_empty())
            .map(String::from)
            .collect();

        Self { names }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

/// Names revealed at the end of a draw, in reveal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WinnerList {
    winners: Vec<String>,
}

impl WinnerList {
    pub fn new(winners: Vec<String>) -> Self {
        Self { winners }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.winners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.winners.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.winners
    }
}
