// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Frame loop — the heartbeat of the clock.
//
// This is the module that wires everything together: each iteration
// re-queries the terminal size, asks the face to paint into the frame
// buffer, wipes the screen, writes the frame in one syscall, and sleeps.
// One loop. One tick per second.
//
// # Pacing
//
// The sleep is a fixed interval, not deadline-corrected: the loop sleeps
// `frame_interval` after each frame regardless of how long painting took.
// At sub-millisecond paint cost against a 1-second interval the drift is
// immaterial, but over long runs seconds are not wall-clock aligned —
// don't expect the colon to tick exactly on the second boundary.
//
// # Resize
//
// There is no SIGWINCH bookkeeping. The size is queried fresh every frame,
// so a resized window is simply picked up on the next redraw — for a
// once-per-second display that is all the resize handling needed.
//
// # Cancellation
//
// SIGINT and SIGTERM set a process-wide atomic that the loop checks at
// each frame boundary, so Ctrl-C exits through the normal cleanup path
// and the terminal is restored instead of being left on the alternate
// screen. Tests use [`FrameLoop::run_bounded`] to render an exact number
// of frames into any writer — no external termination required.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::ansi;
use crate::frame::Frame;
use crate::terminal::{Size, Terminal};

// ─── Stop Flag ───────────────────────────────────────────────────────────────

/// Global flag set by signal handlers (and [`request_stop`]). Checked at
/// each frame boundary.
static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Ask the running loop to exit at the next frame boundary.
///
/// Safe to call from any thread. The in-flight sleep is not interrupted,
/// so the loop may take up to one `frame_interval` to actually return.
pub fn request_stop() {
    STOP_REQUESTED.store(true, Ordering::Relaxed);
}

/// Install signal handlers for SIGINT and SIGTERM.
///
/// The handlers simply set the [`STOP_REQUESTED`] flag. This is
/// async-signal-safe: writing to an atomic is one of the few operations
/// permitted inside signal handlers.
#[cfg(unix)]
fn install_stop_handlers() {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = stop_handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(libc::SIGINT, &raw const sa, std::ptr::null_mut());
        libc::sigaction(libc::SIGTERM, &raw const sa, std::ptr::null_mut());
    }
}

#[cfg(unix)]
extern "C" fn stop_handler(_sig: libc::c_int) {
    STOP_REQUESTED.store(true, Ordering::Relaxed);
}

#[cfg(not(unix))]
fn install_stop_handlers() {
    // No-op on non-unix platforms.
}

// ─── Face Trait ──────────────────────────────────────────────────────────────

/// A clock face: paints one frame for the given terminal size.
///
/// This is the seam between the loop and the two face variants. The loop
/// owns pacing, clearing, and output; the face only decides what the frame
/// looks like. The buffer is cleared before each call — paint everything
/// you want visible.
pub trait Face {
    /// Paint one frame into `frame`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the frame fails. Writing to a
    /// [`Frame`] is infallible in practice, but the signature lets a face
    /// propagate formatting errors with `?`.
    fn paint(&mut self, size: Size, frame: &mut Frame) -> io::Result<()>;
}

// ─── Loop Config ─────────────────────────────────────────────────────────────

/// Configuration for the frame loop timing.
#[derive(Debug, Clone, Copy)]
pub struct LoopConfig {
    /// Sleep between frames. Default: 1 second — a clock that shows
    /// seconds has to redraw once per second, and no faster.
    pub frame_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_secs(1),
        }
    }
}

// ─── FrameLoop ───────────────────────────────────────────────────────────────

/// The clock's render loop.
///
/// Owns the terminal handle. Call [`run`](Self::run) to take over the
/// screen and redraw until a stop is requested (Ctrl-C, SIGTERM, or
/// [`request_stop`]).
///
/// # Example
///
/// ```no_run
/// use t_term::frame_loop::{Face, FrameLoop};
/// use t_term::frame::Frame;
/// use t_term::terminal::Size;
///
/// struct Blank;
///
/// impl Face for Blank {
///     fn paint(&mut self, _size: Size, _frame: &mut Frame) -> std::io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut frame_loop = FrameLoop::new()?;
/// frame_loop.run(&mut Blank)?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct FrameLoop {
    terminal: Terminal,
    config: LoopConfig,
}

impl FrameLoop {
    /// Create a frame loop with default configuration (1 s interval).
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn new() -> io::Result<Self> {
        Self::with_config(LoopConfig::default())
    }

    /// Create a frame loop with custom timing configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized.
    pub fn with_config(config: LoopConfig) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new()?,
            config,
        })
    }

    /// The current terminal size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.terminal.size()
    }

    /// Run the loop until a stop is requested.
    ///
    /// This method:
    /// 1. Takes over the screen (alternate screen, hidden cursor)
    /// 2. Installs the SIGINT/SIGTERM handlers
    /// 3. Redraws once per `frame_interval`
    /// 4. Restores the terminal on exit (even on error)
    ///
    /// # Errors
    ///
    /// Returns an error if terminal enter/leave, painting, or output fails.
    pub fn run(&mut self, face: &mut impl Face) -> io::Result<()> {
        STOP_REQUESTED.store(false, Ordering::Relaxed);
        self.terminal.enter()?;
        install_stop_handlers();

        let result = {
            let mut out = io::stdout().lock();
            self.run_inner(face, None, &mut out)
        };

        // Always clean up, even if the loop errored.
        self.terminal.leave()?;

        result
    }

    /// Render exactly `frames` frames into `w`, then return.
    ///
    /// Does not touch the real terminal state (no alternate screen, no
    /// signal handlers) — this is the test entry point for exercising the
    /// loop without a TTY and without external termination. An already
    /// pending stop request still wins over the frame budget.
    ///
    /// # Errors
    ///
    /// Returns an error if painting or writing to `w` fails.
    pub fn run_bounded(
        &mut self,
        face: &mut impl Face,
        frames: u64,
        w: &mut impl Write,
    ) -> io::Result<()> {
        self.run_inner(face, Some(frames), w)
    }

    /// The inner loop, separated so cleanup runs regardless of outcome.
    fn run_inner(
        &mut self,
        face: &mut impl Face,
        max_frames: Option<u64>,
        w: &mut impl Write,
    ) -> io::Result<()> {
        let mut frame = Frame::new();
        let mut rendered: u64 = 0;

        loop {
            if STOP_REQUESTED.load(Ordering::Relaxed)
                || max_frames.is_some_and(|max| rendered >= max)
            {
                return Ok(());
            }

            // ── Probe size, paint, emit ──────────────────────────
            let size = self.terminal.refresh_size();
            frame.clear();
            face.paint(size, &mut frame)?;

            ansi::begin_sync(w)?;
            ansi::clear_and_home(w)?;
            frame.flush_to(w)?;
            ansi::end_sync(w)?;
            w.flush()?;

            rendered += 1;
            if max_frames.is_some_and(|max| rendered >= max)
                || STOP_REQUESTED.load(Ordering::Relaxed)
            {
                return Ok(());
            }

            // Fixed interval, not deadline-corrected.
            thread::sleep(self.config.frame_interval);
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
