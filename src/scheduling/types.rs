//! Core entity types for meetings, slots, and preferences.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

use super::time::TimeOfDay;

// ============================================================================
// Meeting
// ============================================================================

/// A schedulable event with a title, topic, and category.
///
/// Slot options and a poll are organized around a meeting. The poll starts
/// closed; only [`open_poll`](super::ScheduleStore::open_poll) and
/// [`close_poll`](super::ScheduleStore::close_poll) mutate `poll_open`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique identifier, a decimal string assigned sequentially from "1".
    pub id: String,
    /// Meeting title.
    pub title: String,
    /// Subject of the meeting.
    pub topic: String,
    /// Category the meeting belongs to.
    pub category: String,
    /// Whether the preference poll is currently open.
    #[serde(default)]
    pub poll_open: bool,
}

impl Meeting {
    /// Create a new meeting with a closed poll.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        topic: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            topic: topic.into(),
            category: category.into(),
            poll_open: false,
        }
    }
}

// ============================================================================
// Slot
// ============================================================================

/// A candidate date and time-of-day range proposed for a meeting.
///
/// Two slots are equal iff they belong to the same meeting, fall on the same
/// calendar date, and their start and end times denote the same minute of
/// day. Input padding differences never affect identity because dates and
/// times are normalized at parse time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Id of the meeting this slot belongs to.
    pub meeting_id: String,
    /// Calendar date of the slot.
    pub date: NaiveDate,
    /// Start time.
    pub start: TimeOfDay,
    /// End time.
    pub end: TimeOfDay,
}

impl Slot {
    /// Create a slot from already-parsed components.
    pub fn new(meeting_id: impl Into<String>, date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            date,
            start,
            end,
        }
    }

    /// The time range alone, rendered as `"hh:mm-hh:mm"`.
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}

impl fmt::Display for Slot {
    /// Renders the slot identity string `"YYYY-MM-DDThh:mm-hh:mm"`, with
    /// month and day always zero-padded.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}T{}-{}",
            self.date.format("%Y-%m-%d"),
            self.start,
            self.end
        )
    }
}

/// Parse a calendar date, accepting unpadded month and day components.
///
/// `"2024-3-5"` and `"2024-03-05"` parse to the same date; rendering is
/// always zero-padded.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ScheduleError::InvalidDate(s.to_string()))
}

/// Parse a slot label of the form `"hh:mm-hh:mm"` into its two times.
pub fn parse_time_range(label: &str) -> Result<(TimeOfDay, TimeOfDay)> {
    let (start, end) = label
        .split_once('-')
        .ok_or_else(|| ScheduleError::InvalidTime(label.to_string()))?;
    Ok((start.parse()?, end.parse()?))
}

// ============================================================================
// Preference
// ============================================================================

/// A participant's vote for a specific slot of a meeting.
///
/// Identity is the full (slot, email, name, surname) tuple: the same
/// participant voting identically twice deduplicates, while votes for
/// different slots, or different participants voting for the same slot,
/// count separately. The field order gives slot-then-email iteration order
/// when stored in an ordered set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Preference {
    /// The slot the vote is for.
    pub slot: Slot,
    /// Participant email.
    pub email: String,
    /// Participant first name.
    pub name: String,
    /// Participant surname.
    pub surname: String,
}

impl Preference {
    /// Create a new preference.
    pub fn new(
        slot: Slot,
        email: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Self {
        Self {
            slot,
            email: email.into(),
            name: name.into(),
            surname: surname.into(),
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Summary counters for a schedule store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Number of registered categories.
    pub categories: usize,
    /// Number of meetings.
    pub meetings: usize,
    /// Number of slot options across all meetings.
    pub slots: usize,
    /// Number of recorded preferences.
    pub preferences: usize,
    /// Number of meetings whose poll is currently open.
    pub open_polls: usize,
}
