// SPDX-License-Identifier: MIT
//
// The simple face: one bold-green `HH:MM:SS [AM]` line centered in the
// terminal, with the ISO date two rows below it.
//
// Rendering is a pure function of (wall time, terminal size) — same inputs,
// byte-identical frame. The `Face` impl is the only place the real clock
// is consulted.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use t_term::ansi::{self, Attr, Color};
use t_term::frame::Frame;
use t_term::frame_loop::Face;
use t_term::terminal::Size;

use crate::time::WallTime;

/// Column at which `content` starts when centered in `cols` columns.
///
/// `(cols - width) / 2`, floor division, clamped to 0 when the content is
/// wider than the terminal. The original behavior went negative there and
/// emitted garbage cursor coordinates; clamping is a deliberate change.
#[must_use]
pub fn centered_col(cols: u16, content: &str) -> u16 {
    // Clock strings are far narrower than u16::MAX columns.
    #[allow(clippy::cast_possible_truncation)]
    let width = content.width() as u16;
    cols.saturating_sub(width) / 2
}

/// The one-line clock face.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleFace;

impl SimpleFace {
    /// Render one frame for the given wall time and terminal size.
    ///
    /// Layout: time line at row `(rows - 1) / 2`, date line two rows below,
    /// each centered independently, both bold green.
    ///
    /// # Errors
    ///
    /// Propagates write errors from `frame` (infallible for [`Frame`]).
    pub fn render(t: &WallTime, size: Size, frame: &mut Frame) -> io::Result<()> {
        let time_line = t.clock_text();
        let date_line = t.date_iso();

        let time_row = size.rows.saturating_sub(1) / 2;
        // Two below the time line; a terminal shorter than 3 rows clips it.
        let date_row = time_row + 2;

        write_centered(frame, &time_line, size.cols, time_row)?;
        write_centered(frame, &date_line, size.cols, date_row)
    }
}

/// Position, color, write, reset — one centered bold-green line.
fn write_centered(frame: &mut Frame, text: &str, cols: u16, row: u16) -> io::Result<()> {
    ansi::cursor_to(frame, centered_col(cols, text), row)?;
    ansi::style(frame, Attr::BOLD, Color::Green)?;
    frame.write_all(text.as_bytes())?;
    ansi::reset(frame)
}

impl Face for SimpleFace {
    fn paint(&mut self, size: Size, frame: &mut Frame) -> io::Result<()> {
        Self::render(&WallTime::now(), size, frame)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
