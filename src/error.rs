//! Error types for the convene scheduling library.

use thiserror::Error;

/// Main error type for scheduling operations.
///
/// Every variant is caller-correctable: no operation is retried internally,
/// and a failed operation leaves the store unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Meeting not found: {0}")]
    MeetingNotFound(String),

    #[error("Slot overlaps an existing slot for meeting {meeting_id} on {date}")]
    SlotOverlap { meeting_id: String, date: String },

    #[error("No such slot: {0}")]
    SlotNotFound(String),

    #[error("Poll not open for meeting {0}")]
    PollNotOpen(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),
}

/// Result type alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
