//! Client-side scheduling core: calendar grid, 12-hour time stepper,
//! meeting-form validation, and the screen state the hosting UI drives.

pub mod calendar;
pub mod clock;
pub mod models;
pub mod screens;
pub mod validate;
