// SPDX-License-Identifier: MIT
//
// t-clock — a centered terminal clock.
//
// This is the binary that wires the crates together:
//
//   t-term → terminal control, size probe, frame buffer, frame loop
//   t-face → wall time, glyph table, the two faces
//
// Each tick flows through:
//
//   size probe → face.paint(WallTime::now()) → frame bytes → one write
//
// By default the simple face renders; `t-clock --big` selects the
// ASCII-art face. Ctrl-C (or SIGTERM) stops the loop at the next frame
// boundary and the terminal is restored.

use std::env;
use std::process;

use t_face::{BigFace, SimpleFace};
use t_term::frame_loop::FrameLoop;
use t_term::terminal;

/// Which face to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaceChoice {
    Simple,
    Big,
}

/// Pick a face from the command line: no argument → simple, `--big` → big.
fn choose_face(args: &[String]) -> Result<FaceChoice, String> {
    match args {
        [] => Ok(FaceChoice::Simple),
        [arg] if arg == "--big" => Ok(FaceChoice::Big),
        [arg] => Err(format!("unknown argument `{arg}`")),
        _ => Err("too many arguments".to_string()),
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let choice = choose_face(&args).unwrap_or_else(|msg| {
        eprintln!("t-clock: {msg}");
        eprintln!("usage: t-clock [--big]");
        process::exit(2);
    });

    // A clock that can't measure the terminal can't center anything.
    if terminal::get_size().is_none() {
        eprintln!("t-clock: cannot determine terminal size (stdout is not a terminal?)");
        process::exit(1);
    }

    let mut frame_loop = FrameLoop::new().unwrap_or_else(|e| {
        eprintln!("t-clock: failed to initialize terminal: {e}");
        process::exit(1);
    });

    let result = match choice {
        FaceChoice::Simple => frame_loop.run(&mut SimpleFace),
        FaceChoice::Big => frame_loop.run(&mut BigFace),
    };

    if let Err(e) = result {
        eprintln!("t-clock: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
