// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit — the frame loop composes these into a
// frame. This module just knows the byte-level encoding of every terminal
// command the clock needs.
//
// All cursor positions are 0-indexed in our API and converted to 1-indexed
// for the terminal (ANSI standard uses 1-based coordinates).
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to a `Frame` (backed by a Vec).
use std::io::{self, Write};

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(x, y)` using the CUP (Cursor Position) sequence.
///
/// Our coordinates are 0-indexed; ANSI CUP is 1-indexed.
#[inline]
pub fn cursor_to(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", y + 1, x + 1)
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Home the cursor and clear the screen (`CUP` + `ED 2`).
///
/// This is the per-frame wipe: everything from the previous frame is gone
/// and the next write starts at the top-left cell.
#[inline]
pub fn clear_and_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H\x1b[2J")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Color & Attributes ──────────────────────────────────────────────────────

/// The 8 standard ANSI foreground colors, plus the terminal default.
///
/// A clock face needs exactly one of these (green), but the encoding is
/// uniform so the face layer picks rather than hard-codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Terminal default foreground (SGR 39).
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// SGR foreground code (30–37), or 39 for the default.
    #[must_use]
    const fn sgr(self) -> u8 {
        match self {
            Self::Default => 39,
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }
}

bitflags::bitflags! {
    /// SGR text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const BOLD    = 1 << 0;
        const DIM     = 1 << 1;
        const BLINK   = 1 << 2;
        const INVERSE = 1 << 3;
    }
}

impl Attr {
    /// SGR codes for the set attributes, in ascending code order.
    fn codes(self) -> impl Iterator<Item = u8> {
        [
            (Self::BOLD, 1),
            (Self::DIM, 2),
            (Self::BLINK, 5),
            (Self::INVERSE, 7),
        ]
        .into_iter()
        .filter_map(move |(flag, code)| self.contains(flag).then_some(code))
    }
}

/// Set the foreground color (SGR 30–37 / 39).
#[inline]
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    write!(w, "\x1b[{}m", color.sgr())
}

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;5m` for
/// bold + blink. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }
    w.write_all(b"\x1b[")?;
    for (i, code) in attr.codes().enumerate() {
        if i > 0 {
            w.write_all(b";")?;
        }
        write!(w, "{code}")?;
    }
    w.write_all(b"m")
}

/// Set attributes and foreground color in one combined SGR sequence.
///
/// `style(w, Attr::BOLD, Color::Green)` emits `\x1b[1;32m` — the exact
/// bold-green sequence the clock paints with. Attribute codes come first,
/// the color code last.
pub fn style(w: &mut impl Write, attr: Attr, color: Color) -> io::Result<()> {
    w.write_all(b"\x1b[")?;
    for code in attr.codes() {
        write!(w, "{code};")?;
    }
    write!(w, "{}m", color.sgr())
}

// ─── Synchronized Output ─────────────────────────────────────────────────────

/// Begin synchronized output (DEC Private Mode 2026).
///
/// Tells the terminal to buffer all subsequent output until [`end_sync`].
/// A clear-then-redraw cycle inside a sync block never shows the blank
/// intermediate state, so the once-per-second redraw doesn't flicker.
/// Supported by modern terminals: Kitty, `WezTerm`, iTerm2, foot, etc.;
/// others ignore the sequence and fall back to the plain redraw.
#[inline]
pub fn begin_sync(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?2026h")
}

/// End synchronized output — terminal renders the buffered frame.
#[inline]
pub fn end_sync(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?2026l")
}

// ─── Alternate Screen ───────────────────────────────────────────────────────

/// Enter the alternate screen buffer (DEC Private Mode 1049).
///
/// The alternate screen is a separate buffer that preserves the original
/// terminal content. On exit, the original content is restored — the clock
/// leaves no scrollback litter behind.
#[inline]
pub fn enter_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049h")
}

/// Exit the alternate screen buffer and restore original content.
#[inline]
pub fn exit_alt_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?1049l")
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: run an ANSI function and return its output as a string.
    fn emit<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    // ── Cursor ──────────────────────────────────────────────────────────

    #[test]
    fn cursor_to_origin() {
        assert_eq!(emit(|w| cursor_to(w, 0, 0)), "\x1b[1;1H");
    }

    #[test]
    fn cursor_to_position() {
        assert_eq!(emit(|w| cursor_to(w, 33, 11)), "\x1b[12;34H");
    }

    #[test]
    fn cursor_to_max() {
        // Verify no overflow with large coordinates.
        let s = emit(|w| cursor_to(w, 999, 499));
        assert_eq!(s, "\x1b[500;1000H");
    }

    #[test]
    fn cursor_hide_sequence() {
        assert_eq!(emit(|w| cursor_hide(w)), "\x1b[?25l");
    }

    #[test]
    fn cursor_show_sequence() {
        assert_eq!(emit(|w| cursor_show(w)), "\x1b[?25h");
    }

    // ── Screen ──────────────────────────────────────────────────────────

    #[test]
    fn clear_screen_sequence() {
        assert_eq!(emit(|w| clear_screen(w)), "\x1b[2J");
    }

    #[test]
    fn clear_and_home_homes_first() {
        assert_eq!(emit(|w| clear_and_home(w)), "\x1b[H\x1b[2J");
    }

    #[test]
    fn reset_sequence() {
        assert_eq!(emit(|w| reset(w)), "\x1b[0m");
    }

    // ── Color ───────────────────────────────────────────────────────────

    #[test]
    fn fg_default() {
        assert_eq!(emit(|w| fg(w, Color::Default)), "\x1b[39m");
    }

    #[test]
    fn fg_green() {
        assert_eq!(emit(|w| fg(w, Color::Green)), "\x1b[32m");
    }

    #[test]
    fn fg_white() {
        assert_eq!(emit(|w| fg(w, Color::White)), "\x1b[37m");
    }

    // ── Attributes ──────────────────────────────────────────────────────

    #[test]
    fn attrs_empty_emits_nothing() {
        assert_eq!(emit(|w| attrs(w, Attr::empty())), "");
    }

    #[test]
    fn attrs_bold() {
        assert_eq!(emit(|w| attrs(w, Attr::BOLD)), "\x1b[1m");
    }

    #[test]
    fn attrs_combined_bold_blink() {
        assert_eq!(emit(|w| attrs(w, Attr::BOLD | Attr::BLINK)), "\x1b[1;5m");
    }

    #[test]
    fn attrs_all() {
        let all = Attr::BOLD | Attr::DIM | Attr::BLINK | Attr::INVERSE;
        assert_eq!(emit(|w| attrs(w, all)), "\x1b[1;2;5;7m");
    }

    // ── Combined style ──────────────────────────────────────────────────

    #[test]
    fn style_bold_green_is_the_clock_sequence() {
        assert_eq!(emit(|w| style(w, Attr::BOLD, Color::Green)), "\x1b[1;32m");
    }

    #[test]
    fn style_no_attrs_is_plain_color() {
        assert_eq!(emit(|w| style(w, Attr::empty(), Color::Red)), "\x1b[31m");
    }

    #[test]
    fn style_two_attrs() {
        assert_eq!(
            emit(|w| style(w, Attr::BOLD | Attr::INVERSE, Color::Default)),
            "\x1b[1;7;39m"
        );
    }

    // ── Synchronized Output ─────────────────────────────────────────────

    #[test]
    fn sync_begin() {
        assert_eq!(emit(|w| begin_sync(w)), "\x1b[?2026h");
    }

    #[test]
    fn sync_end() {
        assert_eq!(emit(|w| end_sync(w)), "\x1b[?2026l");
    }

    // ── Alternate Screen ────────────────────────────────────────────────

    #[test]
    fn enter_alt_screen_sequence() {
        assert_eq!(emit(|w| enter_alt_screen(w)), "\x1b[?1049h");
    }

    #[test]
    fn exit_alt_screen_sequence() {
        assert_eq!(emit(|w| exit_alt_screen(w)), "\x1b[?1049l");
    }

    // ── Composition ─────────────────────────────────────────────────────

    #[test]
    fn multiple_sequences_compose() {
        let mut buf = Vec::new();
        cursor_to(&mut buf, 33, 11).unwrap();
        style(&mut buf, Attr::BOLD, Color::Green).unwrap();
        buf.extend_from_slice(b"09:05:03 [PM]");
        reset(&mut buf).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "\x1b[12;34H\x1b[1;32m09:05:03 [PM]\x1b[0m");
    }
}
