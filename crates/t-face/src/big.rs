// SPDX-License-Identifier: MIT
//
// The big face: the time as large ASCII-art glyph blocks, stacked
// hours / colon / minutes / colon / seconds / AM-PM, with the long-form
// date underneath.
//
// Centering uses one shared left padding for the whole frame, computed
// from a fixed layout width of 54 columns. Per-glyph centering would
// produce jagged edges since glyph widths vary slightly; one shared pad
// keeps every line flush. The pad is clamped to zero on narrow terminals.
//
// The colon blocks get their blank space recolored bold green — the
// original's blinking-colon effect, reproduced as a recoloring of the
// space character rather than a timer.

use std::io::{self, Write};

use t_term::frame::Frame;
use t_term::frame_loop::Face;
use t_term::terminal::Size;

use crate::glyph::{self, Glyph};
use crate::time::WallTime;

/// Fixed total width assumed for the big-glyph layout, in columns.
///
/// A static approximation (the widest stacked block is narrower), kept
/// constant so the padding is computed once per frame, not per glyph.
pub const FRAME_WIDTH: u16 = 54;

/// A space wrapped in bold-green SGR — the colon blink effect.
/// Must match `ansi::style(Attr::BOLD, Color::Green)` + reset (pinned by test).
const BLINK_SPACE: &str = "\x1b[1;32m \x1b[0m";

/// Shared left padding for every line of the frame: `max(0, (cols - 54) / 2)`.
#[must_use]
pub fn left_pad(cols: u16) -> u16 {
    cols.saturating_sub(FRAME_WIDTH) / 2
}

/// The big-glyph clock face.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigFace;

impl BigFace {
    /// Render one frame for the given wall time and terminal size.
    ///
    /// Emits, top to bottom, each block followed by a blank line:
    /// hours, colon, minutes, colon, seconds, AM/PM — then the date.
    ///
    /// # Errors
    ///
    /// Propagates write errors from `frame` (infallible for [`Frame`]).
    pub fn render(t: &WallTime, size: Size, frame: &mut Frame) -> io::Result<()> {
        let pad = " ".repeat(usize::from(left_pad(size.cols)));

        write_digit_pair(frame, &pad, t.hour_digits())?;
        writeln!(frame)?;
        write_colon(frame, &pad)?;
        writeln!(frame)?;
        write_digit_pair(frame, &pad, t.minute_digits())?;
        writeln!(frame)?;
        write_colon(frame, &pad)?;
        writeln!(frame)?;
        write_digit_pair(frame, &pad, t.second_digits())?;
        writeln!(frame)?;
        write_block(frame, &pad, glyph_for_token(t.meridiem.token())?)?;
        writeln!(frame)?;
        writeln!(frame, "{pad}{}", t.date_long())
    }
}

impl Face for BigFace {
    fn paint(&mut self, size: Size, frame: &mut Frame) -> io::Result<()> {
        Self::render(&WallTime::now(), size, frame)
    }
}

// ─── Block emission ─────────────────────────────────────────────────────────

/// Resolve a glyph table token, mapping a miss to an I/O error.
///
/// The clock only ever asks for digits, `:`, `AM`, and `PM`, all of which
/// the table has — but the loop propagates errors, so a table gap surfaces
/// as a clean error instead of a panic mid-frame.
fn glyph_for_token(token: &str) -> io::Result<&'static Glyph> {
    glyph::lookup(token).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no glyph for token {token:?}"),
        )
    })
}

fn glyph_for_char(ch: char) -> io::Result<&'static Glyph> {
    glyph::for_char(ch).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("no glyph for character {ch:?}"),
        )
    })
}

/// Emit one glyph block, each line prefixed with the shared padding.
fn write_block(frame: &mut Frame, pad: &str, glyph: &Glyph) -> io::Result<()> {
    for line in glyph {
        writeln!(frame, "{pad}{line}")?;
    }
    Ok(())
}

/// Emit a two-digit field as one merged block (tens glyph beside ones glyph).
fn write_digit_pair(frame: &mut Frame, pad: &str, digits: [char; 2]) -> io::Result<()> {
    let tens = glyph_for_char(digits[0])?;
    let ones = glyph_for_char(digits[1])?;
    for line in glyph::merge(tens, ones) {
        writeln!(frame, "{pad}{line}")?;
    }
    Ok(())
}

/// Emit the colon block with its blank space recolored bold green.
fn write_colon(frame: &mut Frame, pad: &str) -> io::Result<()> {
    let colon = glyph_for_char(':')?;
    for line in colon {
        writeln!(frame, "{pad}{}", line.replace(' ', BLINK_SPACE))?;
    }
    Ok(())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
