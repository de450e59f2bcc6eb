/// Meeting-update form screen state: the editable field snapshot, the
/// standing error map, and the participant roster backing the selection
/// modal. Validation runs in full on submit; an individual field is only
/// re-validated while typing once it already carries an error.

use std::collections::HashMap;

use crate::models::datetime::SelectedDateTime;
use crate::models::meeting::{
    generate_meeting_link, MeetingForm, MeetingType, MeetingUpdate, REMINDER_OPTIONS,
};
use crate::models::participant::{self, Participant};
use crate::validate::{validate_meeting_form, validate_meeting_link, validate_meeting_title};

#[derive(Debug, Clone)]
pub struct UpdateMeeting {
    pub form: MeetingForm,
    pub notes: String,
    pub reminder: String,
    pub errors: HashMap<String, String>,
    roster: Vec<Participant>,
}

impl UpdateMeeting {
    /// Open the form for a picked date-time (or none yet). Starts as an
    /// offline meeting with the first two roster members invited.
    pub fn new(roster: Vec<Participant>, selected_date_time: Option<SelectedDateTime>) -> Self {
        let participants = roster.iter().take(2).cloned().collect();
        UpdateMeeting {
            form: MeetingForm {
                meeting_title: "Property Visit Demo".to_string(),
                selected_date_time,
                meeting_type: Some(MeetingType::Offline),
                meeting_link: String::new(),
                participants,
            },
            notes: "Prepare client presentation slides before the meeting".to_string(),
            reminder: "Notification".to_string(),
            errors: HashMap::new(),
            roster,
        }
    }

    /// Replace the selected date-time, e.g. after revisiting the picker.
    pub fn set_date_time(&mut self, selected: SelectedDateTime) {
        self.form.selected_date_time = Some(selected);
        self.errors.remove("date_time");
    }

    pub fn set_title(&mut self, text: &str) {
        self.form.meeting_title = text.to_string();
        if self.errors.contains_key("meeting_title") {
            match validate_meeting_title(text) {
                Some(message) => self.errors.insert("meeting_title".to_string(), message),
                None => self.errors.remove("meeting_title"),
            };
        }
    }

    pub fn set_link(&mut self, text: &str) {
        self.form.meeting_link = text.to_string();
        if self.errors.contains_key("meeting_link")
            && self.form.meeting_type == Some(MeetingType::Online)
        {
            match validate_meeting_link(text) {
                Some(message) => self.errors.insert("meeting_link".to_string(), message),
                None => self.errors.remove("meeting_link"),
            };
        }
    }

    /// Switching to Online mints a fresh join link; switching back to
    /// Offline clears it. Re-selecting the current type changes nothing.
    pub fn set_meeting_type(&mut self, meeting_type: MeetingType) {
        if self.form.meeting_type == Some(meeting_type) {
            return;
        }
        self.form.meeting_type = Some(meeting_type);
        self.form.meeting_link = match meeting_type {
            MeetingType::Online => generate_meeting_link(),
            MeetingType::Offline => String::new(),
        };
    }

    pub fn set_notes(&mut self, text: &str) {
        self.notes = text.to_string();
    }

    pub fn set_reminder(&mut self, option: &str) {
        if REMINDER_OPTIONS.contains(&option) {
            self.reminder = option.to_string();
        } else {
            log::warn!("unknown reminder option {option:?} ignored");
        }
    }

    pub fn toggle_participant(&mut self, id: i64) {
        participant::toggle_participant(&mut self.form.participants, &self.roster, id);
    }

    pub fn is_participant_selected(&self, id: i64) -> bool {
        participant::is_selected(&self.form.participants, id)
    }

    /// Roster entries matching the selection modal's search query.
    pub fn search_roster(&self, query: &str) -> Vec<&Participant> {
        participant::filter_by_name(&self.roster, query)
    }

    /// "2 participants selected" caption for the selection modal.
    pub fn selection_summary(&self) -> String {
        participant::selected_count_label(self.form.participants.len())
    }

    /// The date-time field's display text, with the design mock's
    /// placeholder when nothing has been picked yet.
    pub fn formatted_date_time(&self) -> String {
        match &self.form.selected_date_time {
            Some(dt) => dt.to_string(),
            None => "12-05-2025 | 5:00 PM".to_string(),
        }
    }

    /// Validate and, if clean, hand back the finished update payload.
    /// On failure the error map is replaced wholesale and `None` returned.
    pub fn submit(&mut self) -> Option<MeetingUpdate> {
        let result = validate_meeting_form(&self.form);
        if !result.is_valid {
            log::debug!("meeting form rejected with {} error(s)", result.errors.len());
            self.errors = result.errors;
            return None;
        }
        self.errors.clear();

        let (Some(date_time), Some(meeting_type)) =
            (self.form.selected_date_time, self.form.meeting_type)
        else {
            return None;
        };
        Some(MeetingUpdate {
            title: self.form.meeting_title.clone(),
            meeting_type,
            date_time,
            participants: self.form.participants.clone(),
            reminder: self.reminder.clone(),
            link: self.form.meeting_link.clone(),
            notes: self.notes.clone(),
        })
    }
}
