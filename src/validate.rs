use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::models::meeting::{MeetingForm, MeetingType};

/// Outcome of a whole-form validation pass: one message per failed field,
/// keyed by field name. Built fresh on every call — callers decide whether
/// to overlay it onto standing error state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: HashMap<String, String>,
}

static URL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn url_pattern() -> &'static Regex {
    URL_PATTERN.get_or_init(|| {
        Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
            .expect("url pattern compiles")
    })
}

/// Validate a meeting title: required, at least 3 characters once trimmed.
pub fn validate_meeting_title(title: &str) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Some("Meeting title is required".to_string());
    }
    if trimmed.len() < 3 {
        return Some("Meeting title must be at least 3 characters".to_string());
    }
    None
}

/// Validate a join link for an online meeting: required, and the raw string
/// must match the URL pattern (no trimming, no case folding).
pub fn validate_meeting_link(link: &str) -> Option<String> {
    if link.trim().is_empty() {
        return Some("Meeting link is required for online meetings".to_string());
    }
    if !url_pattern().is_match(link) {
        return Some("Please enter a valid URL".to_string());
    }
    None
}

/// Run every form rule independently and collect all failures — no
/// short-circuiting between fields.
pub fn validate_meeting_form(form: &MeetingForm) -> ValidationResult {
    let mut errors: HashMap<String, String> = HashMap::new();

    if let Some(message) = validate_meeting_title(&form.meeting_title) {
        errors.insert("meeting_title".to_string(), message);
    }

    if form.selected_date_time.is_none() {
        errors.insert("date_time".to_string(), "Date and time is required".to_string());
    }

    match form.meeting_type {
        None => {
            errors.insert("meeting_type".to_string(), "Meeting type is required".to_string());
        }
        Some(MeetingType::Online) => {
            if let Some(message) = validate_meeting_link(&form.meeting_link) {
                errors.insert("meeting_link".to_string(), message);
            }
        }
        Some(MeetingType::Offline) => {}
    }

    if form.participants.is_empty() {
        errors.insert(
            "participants".to_string(),
            "At least one participant is required".to_string(),
        );
    }

    ValidationResult { is_valid: errors.is_empty(), errors }
}
