use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::datetime::SelectedDateTime;
use super::participant::Participant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingType {
    Offline,
    Online,
}

/// Reminder choices offered by the form screen, in display order.
pub const REMINDER_OPTIONS: [&str; 5] = [
    "Notification",
    "5 minutes before",
    "15 minutes before",
    "30 minutes before",
    "1 hour before",
];

/// Snapshot of the form fields that validation looks at. The form screen
/// owns one of these and rewrites fields as the user types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingForm {
    pub meeting_title: String,
    pub selected_date_time: Option<SelectedDateTime>,
    pub meeting_type: Option<MeetingType>,
    pub meeting_link: String,
    pub participants: Vec<Participant>,
}

impl MeetingForm {
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// The finished payload a successful submit hands back to the host.
#[derive(Debug, Clone, Serialize)]
pub struct MeetingUpdate {
    pub title: String,
    pub meeting_type: MeetingType,
    pub date_time: SelectedDateTime,
    pub participants: Vec<Participant>,
    pub reminder: String,
    pub link: String,
    pub notes: String,
}

const LINK_ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const LINK_ID_LEN: usize = 13;

/// Mint a join URL for an online meeting: a random base36 id plus the
/// current unix-millis timestamp under the propertymeet host.
pub fn generate_meeting_link() -> String {
    let mut rng = rand::rng();
    let id: String = (0..LINK_ID_LEN)
        .map(|_| LINK_ID_CHARSET[rng.random_range(0..LINK_ID_CHARSET.len())] as char)
        .collect();
    let timestamp = Utc::now().timestamp_millis();
    format!("https://propertymeet.example.com/{id}-{timestamp}")
}
