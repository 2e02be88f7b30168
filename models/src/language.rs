//! Display language selection.

use crate::{ErrorLocation, ModelError};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

use serde::Serialize;

const EN_US_TAG: &str = "en-US";
const PT_BR_TAG: &str = "pt-BR";

/// Supported string tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::EnUs, Language::PtBr];

    /// Canonical tag, also the persisted form.
    pub const fn tag(self) -> &'static str {
        match self {
            Language::EnUs => EN_US_TAG,
            Language::PtBr => PT_BR_TAG,
        }
    }

    /// Parse a canonical tag. Only exact tags are accepted, so a stale or
    /// hand-edited value falls back to detection instead of guessing.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            EN_US_TAG => Some(Language::EnUs),
            PT_BR_TAG => Some(Language::PtBr),
            _ => None,
        }
    }

    /// Name of the language in that language.
    pub const fn native_name(self) -> &'static str {
        match self {
            Language::EnUs => "English",
            Language::PtBr => "Português",
        }
    }
}

impl Display for Language {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        formatter.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = ModelError;

    #[track_caller]
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let location = ErrorLocation::from(Location::caller());
        Language::from_tag(tag).ok_or_else(|| ModelError::UnknownLanguage {
            tag: tag.to_string(),
            location,
        })
    }
}
