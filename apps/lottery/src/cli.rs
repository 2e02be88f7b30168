//! Command-line arguments for the `lottery` binary.

use models::{Language, WinnerCount};

use std::path::PathBuf;

use clap::builder::PossibleValue;
use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "lottery",
    version,
    about = "Draw random winners from a list of names",
    long_about = "Draw random winners from a list of names.\n\n\
                  Names are separated by commas or new lines. Without --names or\n\
                  --names-file the names from the previous run are used."
)]
pub struct Cli {
    /// Names separated by commas or new lines.
    #[arg(long, value_name = "TEXT", conflicts_with = "names_file")]
    pub names: Option<String>,

    /// Read the names from a file.
    #[arg(long = "names-file", value_name = "PATH")]
    pub names_file: Option<PathBuf>,

    /// How many winners to draw (non-numeric or below 1 counts as 1).
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub winners: Option<String>,

    /// Display language; defaults to the saved one, then the system locale.
    #[arg(long, value_enum)]
    pub language: Option<LanguageArg>,

    /// Directory for config, saved input and the log file.
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Countdown step length in milliseconds (overrides config).
    #[arg(long = "tick-ms", value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Neither read nor save names and language.
    #[arg(long)]
    pub ephemeral: bool,
}

impl Cli {
    pub fn winner_count(&self) -> Option<WinnerCount> {
        self.winners.as_deref().map(WinnerCount::from_input)
    }

    pub fn language(&self) -> Option<Language> {
        self.language.map(Language::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageArg {
    EnUs,
    PtBr,
}

/// Accepts the canonical tags; `--help` lists each with its native name.
impl ValueEnum for LanguageArg {
    fn value_variants<'a>() -> &'a [Self] {
        &[LanguageArg::EnUs, LanguageArg::PtBr]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let language = Language::from(*self);
        Some(PossibleValue::new(language.tag()).help(language.native_name()))
    }
}

impl From<LanguageArg> for Language {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::EnUs => Language::EnUs,
            LanguageArg::PtBr => Language::PtBr,
        }
    }
}
