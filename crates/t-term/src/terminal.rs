// SPDX-License-Identifier: MIT
//
// Terminal control — size query, alternate screen, and RAII cleanup.
//
// Safety: This module necessarily uses `unsafe` for ioctl (TIOCGWINSZ),
// isatty, and raw fd writes. These are the standard POSIX interfaces for
// terminal control — there is no safe alternative. Each unsafe block is
// minimal and documented.
#![allow(unsafe_code)]
//
// The clock never reads input, so there is no raw mode here — the terminal
// stays in canonical mode the whole time. What this module does own is the
// screen: it switches to the alternate screen, hides the cursor, and
// guarantees both are restored on drop, even if the clock panics mid-frame.
//
// The size query goes straight to the kernel via ioctl rather than spawning
// `stty size` once per frame. A subprocess per second is pure overhead and
// quietly depends on a shell utility being installed; the ioctl is one
// syscall against a fd we already hold.

use std::io::{self, Write};
use std::sync::Once;

use crate::ansi;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Total number of cells (`cols × rows`).
    #[inline]
    #[must_use]
    pub const fn area(self) -> u32 {
        self.cols as u32 * self.rows as u32
    }
}

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal, the query fails, or the
/// kernel reports a zero dimension (some terminal emulators do during
/// startup). Callers must treat `None` as "size unknown", never as 0×0 —
/// centering math on a zero width would pin everything to column 0.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Check whether stdin is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── Panic-Safe Terminal Restore ────────────────────────────────────────────

/// Complete terminal restore sequence for emergency use.
///
/// Concatenation of: end synchronized output, reset SGR attributes, show
/// cursor, exit alternate screen. Ordered carefully: alternate screen exit
/// is last so the restored shell content appears with no clock artifacts.
#[rustfmt::skip]
const EMERGENCY_RESTORE: &[u8] = b"\
    \x1b[?2026l\
    \x1b[0m\
    \x1b[?25h\
    \x1b[?1049l";

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the terminal before printing the error.
///
/// Without this, a panic on the alternate screen with a hidden cursor leaves
/// the user staring at the frozen clock face with no visible error. Our hook
/// writes [`EMERGENCY_RESTORE`] directly to fd 1 (bypassing Rust's stdout
/// lock to avoid deadlock if the panic happened mid-frame flush), then
/// delegates to the original panic handler so the error prints to a working
/// terminal.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            original(info);
        }));
    });
}

/// Write the complete restore sequence directly to stdout's file descriptor.
fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = io::stdout().flush();
    }
}

// ─── Terminal ───────────────────────────────────────────────────────────────

/// Terminal handle with RAII cleanup.
///
/// Call [`enter`](Self::enter) to take over the screen (alternate screen,
/// hidden cursor, cleared viewport). The terminal is automatically restored
/// when the handle is dropped — even on panic.
///
/// # Example
///
/// ```no_run
/// use t_term::terminal::Terminal;
///
/// let mut term = Terminal::new()?;
/// term.enter()?;
/// // ... render frames ...
/// // Terminal is restored automatically on drop.
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Terminal {
    /// Current terminal size (cached, refresh with [`refresh_size`](Self::refresh_size)).
    size: Size,

    /// Whether we hold the screen (alt screen + hidden cursor).
    active: bool,
}

impl Terminal {
    /// Create a terminal handle and query the current size.
    ///
    /// Does **not** take over the screen — call [`enter`](Self::enter) for
    /// that. Falls back to 80×24 if the terminal size cannot be determined
    /// (e.g., in tests or piped environments).
    ///
    /// # Errors
    ///
    /// Currently infallible, but returns `Result` for forward compatibility
    /// (e.g., Windows console API initialization).
    pub fn new() -> io::Result<Self> {
        let size = get_size().unwrap_or(Size { cols: 80, rows: 24 });

        Ok(Self {
            size,
            active: false,
        })
    }

    /// Current terminal size (columns, rows).
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Re-query the terminal size from the OS.
    ///
    /// The frame loop calls this once per frame, so a resized window is
    /// picked up on the next redraw without any resize bookkeeping. If the
    /// query fails mid-run, the last known size is kept.
    pub fn refresh_size(&mut self) -> Size {
        if let Some(s) = get_size() {
            self.size = s;
        }
        self.size
    }

    /// Whether we currently hold the screen.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Take over the screen.
    ///
    /// Switches to the alternate screen, hides the cursor, and clears the
    /// viewport. Idempotent: calling `enter()` while already active is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal output fails.
    pub fn enter(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }

        // Install the panic hook (once per process).
        install_panic_hook();

        // Batch all mode-switch sequences to stdout.
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        ansi::enter_alt_screen(&mut lock)?;
        ansi::cursor_hide(&mut lock)?;
        ansi::clear_and_home(&mut lock)?;
        lock.flush()?;

        self.active = true;
        Ok(())
    }

    /// Release the screen and restore the terminal.
    ///
    /// Resets attributes, shows the cursor, and exits the alternate screen —
    /// the shell content from before [`enter`](Self::enter) reappears.
    /// Idempotent: calling `leave()` while inactive is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal output fails.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        let stdout = io::stdout();
        let mut lock = stdout.lock();
        ansi::end_sync(&mut lock)?;
        ansi::reset(&mut lock)?;
        ansi::cursor_show(&mut lock)?;
        ansi::exit_alt_screen(&mut lock)?;
        lock.flush()?;

        self.active = false;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.active {
            let _ = self.leave();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
