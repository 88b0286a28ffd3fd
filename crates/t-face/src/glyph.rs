// SPDX-License-Identifier: MIT
//
// The big-glyph table.
//
// Fixed ASCII-art blocks for the characters a clock face needs: the ten
// digits, the colon, and the AM/PM tokens. Constant data with a match
// lookup — built into the binary, never mutated, nothing to initialize.
//
// Two invariants make side-by-side composition work:
//
//   1. Every glyph is exactly GLYPH_HEIGHT lines tall, so blocks can be
//      concatenated line-by-line with no vertical misalignment.
//   2. Within one glyph every line has the same display width, so a merged
//      block has straight edges.
//
// Both are pinned by tests over the whole table.

use unicode_width::UnicodeWidthStr;

/// Number of lines in every glyph block.
pub const GLYPH_HEIGHT: usize = 6;

/// One big glyph: a fixed-height block of text lines.
pub type Glyph = [&'static str; GLYPH_HEIGHT];

// ─── Glyph Data ─────────────────────────────────────────────────────────────

#[rustfmt::skip]
const ZERO: Glyph = [
    " ██████╗ ",
    "██╔═████╗",
    "██║██╔██║",
    "████╔╝██║",
    "╚██████╔╝",
    " ╚═════╝ ",
];

#[rustfmt::skip]
const ONE: Glyph = [
    " ██╗",
    "███║",
    "╚██║",
    " ██║",
    " ██║",
    " ╚═╝",
];

#[rustfmt::skip]
const TWO: Glyph = [
    "██████╗ ",
    "╚════██╗",
    " █████╔╝",
    "██╔═══╝ ",
    "███████╗",
    "╚══════╝",
];

#[rustfmt::skip]
const THREE: Glyph = [
    "██████╗ ",
    "╚════██╗",
    " █████╔╝",
    " ╚═══██╗",
    "██████╔╝",
    "╚═════╝ ",
];

#[rustfmt::skip]
const FOUR: Glyph = [
    "██╗  ██╗",
    "██║  ██║",
    "███████║",
    "╚════██║",
    "     ██║",
    "     ╚═╝",
];

#[rustfmt::skip]
const FIVE: Glyph = [
    "███████╗",
    "██╔════╝",
    "███████╗",
    "╚════██║",
    "███████║",
    "╚══════╝",
];

#[rustfmt::skip]
const SIX: Glyph = [
    " ██████╗ ",
    "██╔════╝ ",
    "███████╗ ",
    "██╔═══██╗",
    "╚██████╔╝",
    " ╚═════╝ ",
];

#[rustfmt::skip]
const SEVEN: Glyph = [
    "███████╗",
    "╚════██║",
    "    ██╔╝",
    "   ██╔╝ ",
    "   ██║  ",
    "   ╚═╝  ",
];

#[rustfmt::skip]
const EIGHT: Glyph = [
    " █████╗ ",
    "██╔══██╗",
    "╚█████╔╝",
    "██╔══██╗",
    "╚█████╔╝",
    " ╚════╝ ",
];

#[rustfmt::skip]
const NINE: Glyph = [
    " █████╗ ",
    "██╔══██╗",
    "╚██████║",
    " ╚═══██║",
    " █████╔╝",
    " ╚════╝ ",
];

/// The colon separator. Mostly blank — the big face recolors the blank
/// space bold-green for the blink effect.
#[rustfmt::skip]
const COLON: Glyph = [
    "   ",
    "██╗",
    "╚═╝",
    "██╗",
    "╚═╝",
    "   ",
];

#[rustfmt::skip]
const AM: Glyph = [
    " █████╗ ███╗   ███╗",
    "██╔══██╗████╗ ████║",
    "███████║██╔████╔██║",
    "██╔══██║██║╚██╔╝██║",
    "██║  ██║██║ ╚═╝ ██║",
    "╚═╝  ╚═╝╚═╝     ╚═╝",
];

#[rustfmt::skip]
const PM: Glyph = [
    "██████╗ ███╗   ███╗",
    "██╔══██╗████╗ ████║",
    "██████╔╝██╔████╔██║",
    "██╔═══╝ ██║╚██╔╝██║",
    "██║     ██║ ╚═╝ ██║",
    "╚═╝     ╚═╝     ╚═╝",
];

/// Every token in the table, for whole-table invariant tests.
pub const TOKENS: [&str; 13] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ":", "AM", "PM",
];

// ─── Lookup ─────────────────────────────────────────────────────────────────

/// Look up a glyph by token: a single digit, `":"`, `"AM"`, or `"PM"`.
#[must_use]
pub fn lookup(token: &str) -> Option<&'static Glyph> {
    match token {
        "0" => Some(&ZERO),
        "1" => Some(&ONE),
        "2" => Some(&TWO),
        "3" => Some(&THREE),
        "4" => Some(&FOUR),
        "5" => Some(&FIVE),
        "6" => Some(&SIX),
        "7" => Some(&SEVEN),
        "8" => Some(&EIGHT),
        "9" => Some(&NINE),
        ":" => Some(&COLON),
        "AM" => Some(&AM),
        "PM" => Some(&PM),
        _ => None,
    }
}

/// Look up the glyph for a single clock character (`'0'..='9'` or `':'`).
#[must_use]
pub fn for_char(ch: char) -> Option<&'static Glyph> {
    match ch {
        '0' => Some(&ZERO),
        '1' => Some(&ONE),
        '2' => Some(&TWO),
        '3' => Some(&THREE),
        '4' => Some(&FOUR),
        '5' => Some(&FIVE),
        '6' => Some(&SIX),
        '7' => Some(&SEVEN),
        '8' => Some(&EIGHT),
        '9' => Some(&NINE),
        ':' => Some(&COLON),
        _ => None,
    }
}

// ─── Composition ────────────────────────────────────────────────────────────

/// Display width of a glyph block (all lines share it).
#[must_use]
pub fn width(glyph: &Glyph) -> usize {
    glyph[0].width()
}

/// Concatenate two glyphs side by side, line by line, with no gap.
///
/// The result's lines each have width `width(a) + width(b)` — straight
/// edges, because each input glyph has uniform line widths.
#[must_use]
pub fn merge(a: &Glyph, b: &Glyph) -> [String; GLYPH_HEIGHT] {
    std::array::from_fn(|i| format!("{}{}", a[i], b[i]))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // ── Table invariants ────────────────────────────────────────

    #[test]
    fn every_token_resolves() {
        for token in TOKENS {
            assert!(lookup(token).is_some(), "missing glyph for {token:?}");
        }
    }

    #[test]
    fn every_glyph_is_six_lines() {
        for token in TOKENS {
            let glyph = lookup(token).unwrap();
            assert_eq!(glyph.len(), GLYPH_HEIGHT, "glyph {token:?}");
        }
    }

    #[test]
    fn every_glyph_has_uniform_line_width() {
        for token in TOKENS {
            let glyph = lookup(token).unwrap();
            let expected = glyph[0].width();
            for (i, line) in glyph.iter().enumerate() {
                assert_eq!(
                    line.width(),
                    expected,
                    "glyph {token:?} line {i} width mismatch"
                );
            }
        }
    }

    #[test]
    fn unknown_tokens_miss() {
        assert!(lookup("x").is_none());
        assert!(lookup("am").is_none());
        assert!(lookup("").is_none());
        assert!(for_char('x').is_none());
        assert!(for_char(' ').is_none());
    }

    #[test]
    fn for_char_matches_lookup_for_digits() {
        for ch in "0123456789:".chars() {
            let by_char = for_char(ch).unwrap();
            let by_token = lookup(&ch.to_string()).unwrap();
            assert_eq!(by_char, by_token);
        }
    }

    #[test]
    fn meridiem_glyphs_share_width() {
        // AM and PM must align vertically when either is shown.
        assert_eq!(width(lookup("AM").unwrap()), width(lookup("PM").unwrap()));
    }

    // ── Composition ─────────────────────────────────────────────

    #[test]
    fn merge_zero_nine_pairwise() {
        let zero = for_char('0').unwrap();
        let nine = for_char('9').unwrap();
        let merged = merge(zero, nine);

        assert_eq!(merged.len(), GLYPH_HEIGHT);
        for (i, line) in merged.iter().enumerate() {
            assert_eq!(line.as_str(), &format!("{}{}", zero[i], nine[i]));
            assert_eq!(line.width(), width(zero) + width(nine), "line {i}");
        }
    }

    #[test]
    fn merge_has_no_line_length_mismatch() {
        // Every digit pair composes with straight edges.
        for a in "0123456789".chars() {
            for b in "0123456789".chars() {
                let (ga, gb) = (for_char(a).unwrap(), for_char(b).unwrap());
                let merged = merge(ga, gb);
                let expected = width(ga) + width(gb);
                for line in &merged {
                    assert_eq!(line.width(), expected, "pair {a}{b}");
                }
            }
        }
    }

    #[test]
    fn colon_has_blank_first_and_last_lines() {
        let colon = for_char(':').unwrap();
        assert!(colon[0].trim().is_empty());
        assert!(colon[GLYPH_HEIGHT - 1].trim().is_empty());
    }
}
