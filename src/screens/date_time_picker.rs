/// Picker screen state: a viewed calendar month plus a 12-hour clock
/// selection, seeded from the wall clock the host injects. One method per
/// user action; every action either moves the state or is a no-op.

use chrono::{Datelike, NaiveDateTime, NaiveDate, Timelike};

use crate::calendar::{self, CalendarDay, MonthStep};
use crate::clock;
use crate::models::datetime::{Period, SelectedDateTime};

#[derive(Debug, Clone)]
pub struct DateTimePicker {
    today: NaiveDate,
    pub selected_day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
    pub period: Period,
}

impl DateTimePicker {
    /// Open the picker "now": today's date selected, the clock set to the
    /// current time with the minute floored to the nearest 5.
    pub fn new(now: NaiveDateTime) -> Self {
        DateTimePicker {
            today: now.date(),
            selected_day: now.day(),
            month: now.month0(),
            year: now.year(),
            hour: clock::hour12(now.hour()),
            minute: clock::floor_to_five(now.minute()),
            period: clock::period_of(now.hour()),
        }
    }

    /// The grid for the viewed month, against the today this picker was
    /// opened with.
    pub fn calendar_days(&self) -> Vec<Option<CalendarDay>> {
        calendar::generate_calendar_days(self.year, self.month, self.today)
    }

    /// Tap on a grid cell. Placeholders, disabled cells, and past dates in
    /// the current month are rejected and leave the selection unchanged.
    pub fn select_day(&mut self, cell: Option<CalendarDay>) {
        match calendar::select_date(cell, self.month, self.year, self.today) {
            Some(day) => self.selected_day = day,
            None => log::debug!("rejected selection in {}", self.header_label()),
        }
    }

    pub fn is_current_month(&self) -> bool {
        calendar::is_current_month(self.month, self.year, self.today)
    }

    /// Previous-month navigation is only offered while browsing ahead of
    /// the current month.
    pub fn can_go_previous(&self) -> bool {
        !self.is_current_month()
    }

    pub fn previous_month(&mut self) {
        if !self.can_go_previous() {
            log::debug!("previous-month refused at {}", self.header_label());
            return;
        }
        let (month, year) = calendar::navigate_month(MonthStep::Previous, self.month, self.year);
        self.month = month;
        self.year = year;
    }

    pub fn next_month(&mut self) {
        let (month, year) = calendar::navigate_month(MonthStep::Next, self.month, self.year);
        self.month = month;
        self.year = year;
    }

    pub fn step_hour_up(&mut self) {
        self.hour = clock::increment_hour(self.hour);
    }

    pub fn step_hour_down(&mut self) {
        self.hour = clock::decrement_hour(self.hour);
    }

    pub fn step_minute_up(&mut self) {
        self.minute = clock::increment_minute(self.minute);
    }

    pub fn step_minute_down(&mut self) {
        self.minute = clock::decrement_minute(self.minute);
    }

    pub fn toggle_period(&mut self) {
        self.period = clock::toggle_period(self.period);
    }

    /// "June 2025" month header.
    pub fn header_label(&self) -> String {
        format!("{} {}", calendar::month_name(self.month), self.year)
    }

    /// Package the current selection for the form screen.
    pub fn finish(&self) -> SelectedDateTime {
        SelectedDateTime {
            date: self.selected_day,
            month: self.month,
            year: self.year,
            hour: self.hour,
            minute: self.minute,
            period: self.period,
            is_instant: false,
        }
    }

    /// The "Start Instant Meeting" shortcut: bypasses the picker state and
    /// snapshots the wall clock directly.
    pub fn instant_meeting(now: NaiveDateTime) -> SelectedDateTime {
        SelectedDateTime::instant(now)
    }
}
