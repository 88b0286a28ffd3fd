// SPDX-License-Identifier: MIT
//
// t-term — Terminal layer for t-clock.
//
// Direct terminal control via ANSI escape sequences and a handful of
// POSIX calls: the size probe is one ioctl, the per-frame wipe is one
// escape sequence, and each frame goes out in a single write. No TUI
// framework, no subprocesses — a clock that redraws once per second
// has no business shelling out to `stty` and `clear` every tick.

pub mod ansi;
pub mod frame;
pub mod frame_loop;
pub mod terminal;
