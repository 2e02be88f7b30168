//! Plain-text rendering of the draw for the terminal.

use draw_core::i18n::Translations;

use models::WinnerList;

use std::io::{Result as IoResult, Write};

/// Printed in place of the final `0` step, right before the reveal.
pub const REVEAL_MARKER: &str = "🎊";

/// Title line and the live name count.
pub fn render_header<W: Write>(
    out: &mut W,
    text: &Translations,
    name_count: usize,
) -> IoResult<()> {
    writeln!(out, "{}", text.title)?;
    writeln!(out, "{}", text.names_count(name_count))
}

pub fn render_drawing<W: Write>(out: &mut W, text: &Translations) -> IoResult<()> {
    writeln!(out, "{}", text.drawing)
}

/// One countdown step: the number, or the marker when it reaches zero.
pub fn render_countdown_step<W: Write>(out: &mut W, remaining: u8) -> IoResult<()> {
    if remaining == 0 {
        writeln!(out, "{REVEAL_MARKER}")
    } else {
        writeln!(out, "{remaining}")
    }
}

/// Print every step from `next_step` down to `floor`, then move `next_step`
/// below `floor` (`None` once zero has been printed). Steps the session
/// passed while output was slow are printed late rather than skipped.
pub fn render_countdown_through<W: Write>(
    out: &mut W,
    next_step: &mut Option<u8>,
    floor: u8,
) -> IoResult<()> {
    let Some(next) = *next_step else {
        return Ok(());
    };
    if next < floor {
        return Ok(());
    }

    for remaining in (floor..=next).rev() {
        render_countdown_step(out, remaining)?;
    }
    *next_step = floor.checked_sub(1);
    Ok(())
}

/// Heading (singular for exactly one winner) and a numbered list.
pub fn render_winners<W: Write>(
    out: &mut W,
    text: &Translations,
    winners: &WinnerList,
) -> IoResult<()> {
    writeln!(out, "{}", text.winners_heading(winners.len()))?;
    for (position, name) in winners.iter().enumerate() {
        writeln!(out, "{:>3}. {name}", position + 1)?;
    }
    Ok(())
}

pub fn render_alert<W: Write>(out: &mut W, message: &str) -> IoResult<()> {
    writeln!(out, "{message}")
}
