use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// One selectable cell of the day grid. Placeholder slots (leading/trailing
/// alignment padding) are `None` in the grid itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: u32,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Previous,
    Next,
}

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Single-letter weekday header labels, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

pub fn month_name(month: u32) -> &'static str {
    MONTH_NAMES.get(month as usize).copied().unwrap_or("")
}

/// Number of days in the given month (`month` is 0-based).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month >= 11 { (year + 1, 1) } else { (year, month + 2) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday of the 1st of the month, 0 = Sunday.
fn first_weekday(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Build the 7-column day grid for a viewed month: leading placeholders up
/// to the first weekday, one cell per day with `disabled` set for dates
/// before `today`, trailing placeholders padding to a multiple of 7.
pub fn generate_calendar_days(
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Vec<Option<CalendarDay>> {
    let total_days = days_in_month(year, month);
    let lead = first_weekday(year, month) as usize;

    let mut cells: Vec<Option<CalendarDay>> = Vec::with_capacity(lead + total_days as usize + 6);
    cells.resize(lead, None);

    for day in 1..=total_days {
        let disabled = NaiveDate::from_ymd_opt(year, month + 1, day)
            .map_or(true, |date| date < today);
        cells.push(Some(CalendarDay { day, disabled }));
    }

    let remainder = cells.len() % 7;
    if remainder != 0 {
        cells.resize(cells.len() + 7 - remainder, None);
    }

    cells
}

/// Resolve a tap on a grid cell to a selected day, or `None` for a no-op.
///
/// Placeholders and disabled cells never select. Browsing a month other
/// than today's accepts any enabled cell. In the current month the full
/// date is re-checked against today's midnight instead of trusting the
/// cell's `disabled` flag, which may predate a day rollover.
pub fn select_date(
    candidate: Option<CalendarDay>,
    month: u32,
    year: i32,
    today: NaiveDate,
) -> Option<u32> {
    let cell = candidate?;
    if cell.disabled {
        return None;
    }
    if month != today.month0() || year != today.year() {
        return Some(cell.day);
    }
    let date = NaiveDate::from_ymd_opt(year, month + 1, cell.day)?;
    if date >= today { Some(cell.day) } else { None }
}

/// Step the viewed month, wrapping the year at the January/December edges.
pub fn navigate_month(step: MonthStep, month: u32, year: i32) -> (u32, i32) {
    match step {
        MonthStep::Previous if month == 0 => (11, year - 1),
        MonthStep::Previous => (month - 1, year),
        MonthStep::Next if month == 11 => (0, year + 1),
        MonthStep::Next => (month + 1, year),
    }
}

pub fn is_current_month(month: u32, year: i32, today: NaiveDate) -> bool {
    month == today.month0() && year == today.year()
}
