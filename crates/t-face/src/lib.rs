// SPDX-License-Identifier: MIT
//
// t-face — Clock faces for t-clock.
//
// Everything that decides what the clock looks like lives here: the
// wall-time snapshot, the big-glyph table, and the two faces (one-line
// and big ASCII art). Both faces render as pure functions of
// (wall time, terminal size) and plug into t-term's frame loop through
// the `Face` trait — one loop, two looks.

pub mod big;
pub mod glyph;
pub mod simple;
pub mod time;

pub use big::BigFace;
pub use simple::SimpleFace;
pub use time::{Meridiem, WallTime};
