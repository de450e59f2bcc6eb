use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::clock;

/// Clock period of a 12-hour time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-chosen meeting moment, handed from the picker screen to the form
/// screen. `date` is always valid for `(month, year)` because the calendar
/// only offers real days; `month` is a 0-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedDateTime {
    pub date: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub period: Period,
    #[serde(default)]
    pub is_instant: bool,
}

impl SelectedDateTime {
    /// Snapshot the wall clock for a "start now" meeting: minute floored to
    /// the nearest 5, hour/period derived from the 24-hour time.
    pub fn instant(now: NaiveDateTime) -> Self {
        SelectedDateTime {
            date: now.day(),
            month: now.month0(),
            year: now.year(),
            hour: clock::hour12(now.hour()),
            minute: clock::floor_to_five(now.minute()),
            period: clock::period_of(now.hour()),
            is_instant: true,
        }
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl fmt::Display for SelectedDateTime {
    /// `12-05-2025 | 5:00 PM` — day and minute zero-padded, month shown
    /// 1-based, hour left bare.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}-{:02}-{} | {}:{:02} {}",
            self.date,
            self.month + 1,
            self.year,
            self.hour,
            self.minute,
            self.period
        )
    }
}
