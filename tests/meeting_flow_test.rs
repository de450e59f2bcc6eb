use chrono::NaiveDate;

use propertymeet::models::datetime::{Period, SelectedDateTime};
use propertymeet::models::meeting::MeetingType;
use propertymeet::models::participant::demo_roster;
use propertymeet::screens::{DateTimePicker, UpdateMeeting};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn june_15_evening() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .unwrap()
        .and_hms_opt(17, 43, 0)
        .unwrap()
}

#[test]
fn test_pick_schedule_and_update_meeting() {
    init_logging();

    // Pick a date next month and a time on the stepper.
    let mut picker = DateTimePicker::new(june_15_evening());
    picker.next_month();
    let grid = picker.calendar_days();
    let day_10 = grid.iter().flatten().find(|c| c.day == 10).copied();
    picker.select_day(day_10);
    picker.step_hour_down();
    picker.step_minute_up();
    picker.toggle_period();
    let picked = picker.finish();
    assert_eq!(picked.date, 10);
    assert_eq!(picked.month, 6);
    assert_eq!(picked.year, 2025);
    assert_eq!(picked.hour, 4);
    assert_eq!(picked.minute, 45);
    assert_eq!(picked.period, Period::Am);

    // The payload crosses the navigation boundary as JSON.
    let carried = SelectedDateTime::from_json(&picked.to_json()).unwrap();
    assert_eq!(carried, picked);

    // Fill in the form and submit.
    let mut form = UpdateMeeting::new(demo_roster(), Some(carried));
    assert_eq!(form.formatted_date_time(), "10-07-2025 | 4:45 AM");
    form.set_title("Walkthrough with buyers");
    form.set_meeting_type(MeetingType::Online);
    form.set_reminder("30 minutes before");
    form.toggle_participant(4);
    let update = form.submit().expect("valid form");
    assert_eq!(update.title, "Walkthrough with buyers");
    assert_eq!(update.meeting_type, MeetingType::Online);
    assert!(update.link.starts_with("https://propertymeet.example.com/"));
    assert_eq!(update.reminder, "30 minutes before");
    assert_eq!(update.participants.len(), 3);
    assert_eq!(update.date_time, carried);
}

#[test]
fn test_instant_meeting_skips_the_picker() {
    init_logging();

    let picked = DateTimePicker::instant_meeting(june_15_evening());
    assert!(picked.is_instant);
    assert_eq!(picked.to_string(), "15-06-2025 | 5:40 PM");

    let mut form = UpdateMeeting::new(demo_roster(), Some(picked));
    form.set_title("Now please");
    let update = form.submit().expect("valid form");
    assert!(update.date_time.is_instant);
}

#[test]
fn test_submit_failure_paints_errors_then_recovers() {
    init_logging();

    // No picked date-time, emptied title, online without a usable link.
    let mut form = UpdateMeeting::new(demo_roster(), None);
    form.set_title("  ");
    form.set_meeting_type(MeetingType::Online);
    form.set_link("not a url");
    form.toggle_participant(1);
    form.toggle_participant(2);

    assert!(form.submit().is_none());
    assert_eq!(form.errors["meeting_title"], "Meeting title is required");
    assert_eq!(form.errors["date_time"], "Date and time is required");
    assert_eq!(form.errors["meeting_link"], "Please enter a valid URL");
    assert_eq!(
        form.errors["participants"],
        "At least one participant is required"
    );

    // Fixing each field as the user would.
    form.set_title("Site visit");
    assert!(!form.errors.contains_key("meeting_title"));
    form.set_link("https://example.com/room/42");
    assert!(!form.errors.contains_key("meeting_link"));
    form.toggle_participant(1);
    form.set_date_time(DateTimePicker::instant_meeting(june_15_evening()));

    let update = form.submit().expect("recovered form");
    assert!(form.errors.is_empty());
    assert_eq!(update.participants.len(), 1);
}

#[test]
fn test_roster_search_feeds_the_selection_modal() {
    let form = UpdateMeeting::new(demo_roster(), None);
    let hits = form.search_roster("sa");
    let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Sarah Wilson", "Lisa Davis"]);
    assert_eq!(form.selection_summary(), "2 participants selected");
    assert_eq!(hits[0].role_label(), "Designer");
}
