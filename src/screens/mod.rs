pub mod date_time_picker;
pub mod update_meeting;

pub use date_time_picker::DateTimePicker;
pub use update_meeting::UpdateMeeting;
