// SPDX-License-Identifier: MIT
//
// Wall-clock snapshots.
//
// A `WallTime` is the clock's entire input: the current local time broken
// into the 12-hour fields the faces render. It is taken fresh every frame
// and never cached — the system clock is the only state this program has.
//
// Snapshots are plain data, so tests pin an exact instant instead of
// depending on when they run.

use chrono::{DateTime, Local, NaiveDate, Timelike};

// ─── Meridiem ───────────────────────────────────────────────────────────────

/// AM/PM half of the 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// The two-letter token — also the glyph-table key for the big face.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        }
    }
}

// ─── WallTime ───────────────────────────────────────────────────────────────

/// One observation of the local wall clock, decomposed for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Hour on the 12-hour clock, `1..=12` (zero-padded when formatted).
    pub hour: u8,
    /// Minute, `0..=59`.
    pub minute: u8,
    /// Second, `0..=59`.
    pub second: u8,
    /// AM or PM.
    pub meridiem: Meridiem,
    /// Calendar date in the process's local timezone.
    pub date: NaiveDate,
}

impl WallTime {
    /// Snapshot the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_local(&Local::now())
    }

    /// Decompose a local datetime into 12-hour clock fields.
    #[must_use]
    pub fn from_local(dt: &DateTime<Local>) -> Self {
        let (is_pm, hour12) = dt.hour12();
        // hour12 <= 12, minute/second <= 59 — all fit in u8.
        #[allow(clippy::cast_possible_truncation)]
        let (hour, minute, second) = (hour12 as u8, dt.minute() as u8, dt.second() as u8);
        Self {
            hour,
            minute,
            second,
            meridiem: if is_pm { Meridiem::Pm } else { Meridiem::Am },
            date: dt.date_naive(),
        }
    }

    /// The one-line clock string: `HH:MM:SS [AM]`, always 13 columns.
    #[must_use]
    pub fn clock_text(&self) -> String {
        format!(
            "{:02}:{:02}:{:02} [{}]",
            self.hour,
            self.minute,
            self.second,
            self.meridiem.token()
        )
    }

    /// The date as `YYYY-MM-DD` (simple face).
    #[must_use]
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// The date as `Month DD, YYYY` (big face).
    #[must_use]
    pub fn date_long(&self) -> String {
        self.date.format("%B %d, %Y").to_string()
    }

    /// The hour as two digit characters, e.g. 9 → `['0', '9']`.
    #[must_use]
    pub const fn hour_digits(&self) -> [char; 2] {
        digit_pair(self.hour)
    }

    /// The minute as two digit characters.
    #[must_use]
    pub const fn minute_digits(&self) -> [char; 2] {
        digit_pair(self.minute)
    }

    /// The second as two digit characters.
    #[must_use]
    pub const fn second_digits(&self) -> [char; 2] {
        digit_pair(self.second)
    }
}

/// Split a value `0..=99` into its two zero-padded digit characters.
const fn digit_pair(n: u8) -> [char; 2] {
    [(b'0' + n / 10) as char, (b'0' + n % 10) as char]
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// 09:05:03 PM on 2024-07-01 — the fixture used throughout.
    fn nine_oh_five() -> WallTime {
        WallTime {
            hour: 9,
            minute: 5,
            second: 3,
            meridiem: Meridiem::Pm,
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        }
    }

    // ── Meridiem ────────────────────────────────────────────────

    #[test]
    fn meridiem_tokens() {
        assert_eq!(Meridiem::Am.token(), "AM");
        assert_eq!(Meridiem::Pm.token(), "PM");
    }

    // ── Formatting ──────────────────────────────────────────────

    #[test]
    fn clock_text_exact() {
        assert_eq!(nine_oh_five().clock_text(), "09:05:03 [PM]");
    }

    #[test]
    fn clock_text_is_13_columns() {
        assert_eq!(nine_oh_five().clock_text().len(), 13);
    }

    #[test]
    fn clock_text_zero_pads_all_fields() {
        let t = WallTime {
            hour: 1,
            minute: 0,
            second: 9,
            meridiem: Meridiem::Am,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        };
        assert_eq!(t.clock_text(), "01:00:09 [AM]");
    }

    #[test]
    fn clock_text_noon_and_midnight_hours() {
        let mut t = nine_oh_five();
        t.hour = 12;
        t.meridiem = Meridiem::Pm;
        assert_eq!(t.clock_text(), "12:05:03 [PM]");
        t.meridiem = Meridiem::Am;
        assert_eq!(t.clock_text(), "12:05:03 [AM]");
    }

    #[test]
    fn date_iso_format() {
        assert_eq!(nine_oh_five().date_iso(), "2024-07-01");
    }

    #[test]
    fn date_long_format() {
        assert_eq!(nine_oh_five().date_long(), "July 01, 2024");
    }

    // ── Digit pairs ─────────────────────────────────────────────

    #[test]
    fn hour_digits_zero_padded() {
        assert_eq!(nine_oh_five().hour_digits(), ['0', '9']);
    }

    #[test]
    fn minute_and_second_digits() {
        let t = nine_oh_five();
        assert_eq!(t.minute_digits(), ['0', '5']);
        assert_eq!(t.second_digits(), ['0', '3']);
    }

    #[test]
    fn digit_pair_two_digit_values() {
        let t = WallTime {
            hour: 12,
            minute: 59,
            second: 40,
            meridiem: Meridiem::Am,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        assert_eq!(t.hour_digits(), ['1', '2']);
        assert_eq!(t.minute_digits(), ['5', '9']);
        assert_eq!(t.second_digits(), ['4', '0']);
    }

    // ── Live snapshot ───────────────────────────────────────────

    #[test]
    fn now_produces_valid_ranges() {
        let t = WallTime::now();
        assert!((1..=12).contains(&t.hour));
        assert!(t.minute <= 59);
        assert!(t.second <= 59);
    }

    #[test]
    fn from_local_round_trips_hour12() {
        use chrono::TimeZone;
        // 21:05:03 local → 09:05:03 PM.
        let dt = Local.with_ymd_and_hms(2024, 7, 1, 21, 5, 3).unwrap();
        let t = WallTime::from_local(&dt);
        assert_eq!(t.hour, 9);
        assert_eq!(t.meridiem, Meridiem::Pm);
        assert_eq!(t.clock_text(), "09:05:03 [PM]");
    }
}
