// SPDX-License-Identifier: MIT
//
// Frame accumulation.
//
// A `Frame` collects one screen's worth of ANSI output in memory so the
// whole thing can be written in a single write() syscall. Without it, a
// big-glyph face would issue dozens of small writes per redraw — each one
// a chance for the terminal to display a half-painted clock.
//
// Frames are transient: the loop clears and refills the same buffer every
// second. Nothing is diffed against the previous frame; at one redraw per
// second there is nothing to win by diffing.

use std::io::{self, Write};

/// A byte buffer that accumulates ANSI output for a single `write()` syscall.
///
/// Implements [`Write`], so the `ansi` functions and `write!` work on it
/// directly. Default capacity: 8 KB — enough for a big-glyph frame without
/// reallocation.
pub struct Frame {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 8192;

impl Frame {
    /// Create an empty frame with default capacity (8 KB).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the frame is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Discard the accumulated bytes, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write the accumulated bytes to `w` and clear the frame.
    ///
    /// One `write_all`, one frame. Does not flush `w` — the caller decides
    /// when the terminal actually sees it.
    ///
    /// # Errors
    ///
    /// Propagates the underlying write error; the frame is cleared only on
    /// success so a failed frame can be retried or dropped by the caller.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        w.write_all(&self.buf)?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for Frame {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_frame_is_empty() {
        let f = Frame::new();
        assert!(f.is_empty());
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn write_accumulates() {
        let mut f = Frame::new();
        f.write_all(b"09:05:03").unwrap();
        f.write_all(b" [PM]").unwrap();
        assert_eq!(f.as_bytes(), b"09:05:03 [PM]");
        assert_eq!(f.len(), 13);
    }

    #[test]
    fn ansi_functions_write_into_frame() {
        let mut f = Frame::new();
        ansi::cursor_to(&mut f, 0, 0).unwrap();
        assert_eq!(f.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut f = Frame::new();
        f.write_all(b"stale frame").unwrap();
        f.clear();
        assert!(f.is_empty());
    }

    #[test]
    fn flush_to_writes_and_clears() {
        let mut f = Frame::new();
        f.write_all(b"tick").unwrap();

        let mut sink = Vec::new();
        f.flush_to(&mut sink).unwrap();

        assert_eq!(sink, b"tick");
        assert!(f.is_empty());
    }

    #[test]
    fn flush_to_empty_frame_writes_nothing() {
        let mut f = Frame::new();
        let mut sink = Vec::new();
        f.flush_to(&mut sink).unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn reuse_after_flush() {
        let mut f = Frame::new();
        let mut sink = Vec::new();

        f.write_all(b"frame one").unwrap();
        f.flush_to(&mut sink).unwrap();
        f.write_all(b"frame two").unwrap();
        f.flush_to(&mut sink).unwrap();

        assert_eq!(sink, b"frame oneframe two");
    }
}
