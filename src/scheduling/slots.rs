//! Slot option management for the schedule store.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, ScheduleError};

use super::store::ScheduleStore;
use super::time::TimeOfDay;
use super::types::{parse_date, Slot};

impl ScheduleStore {
    // ========================================================================
    // Slot Management
    // ========================================================================

    /// Add a candidate slot for a meeting and return its length in hours.
    ///
    /// The date accepts unpadded month/day components; start and end are
    /// `"hh:mm"` times. The new slot must not overlap any existing slot of
    /// the same meeting on the same date.
    ///
    /// The returned length is the forward cyclic distance from start to end
    /// in minutes, divided by 60. An end time that precedes the start in
    /// naive terms wraps through midnight and yields a correspondingly
    /// large, never negative, length.
    pub fn add_option(
        &mut self,
        meeting_id: &str,
        date: &str,
        start: &str,
        end: &str,
    ) -> Result<f64> {
        self.get_meeting(meeting_id)?;

        let date = parse_date(date)?;
        let start: TimeOfDay = start.parse()?;
        let end: TimeOfDay = end.parse()?;

        let conflict = self
            .slots
            .iter()
            .filter(|s| s.meeting_id == meeting_id && s.date == date)
            .any(|s| intervals_conflict(&start, &end, &s.start, &s.end));
        if conflict {
            return Err(ScheduleError::SlotOverlap {
                meeting_id: meeting_id.to_string(),
                date: date.format("%Y-%m-%d").to_string(),
            });
        }

        let slot = Slot::new(meeting_id, date, start, end);
        debug!("Added slot {slot} for meeting {meeting_id}");
        self.slots.push(slot);

        Ok(f64::from(start.forward_distance(&end)) / 60.0)
    }

    /// Slots available for a meeting, grouped by date.
    ///
    /// Keys are zero-padded `"YYYY-MM-DD"` dates; each value lists the
    /// date's slots as `"hh:mm-hh:mm"`, ordered by start time.
    pub fn show_slots(&self, meeting_id: &str) -> Result<BTreeMap<String, Vec<String>>> {
        self.get_meeting(meeting_id)?;

        let mut by_date: BTreeMap<String, Vec<&Slot>> = BTreeMap::new();
        for slot in self.slots.iter().filter(|s| s.meeting_id == meeting_id) {
            by_date
                .entry(slot.date.format("%Y-%m-%d").to_string())
                .or_default()
                .push(slot);
        }

        Ok(by_date
            .into_iter()
            .map(|(date, mut slots)| {
                slots.sort_by_key(|s| s.start);
                (date, slots.into_iter().map(Slot::time_range).collect())
            })
            .collect())
    }
}

/// Overlap test between a new interval and an existing one, under linear
/// minute-of-day ordering.
///
/// Flags the new interval when its start falls inside the existing one, its
/// end falls within-and-after the existing start, it nests fully inside the
/// existing interval, or it fully contains the existing interval. Intervals
/// that merely share a boundary point pass.
fn intervals_conflict(
    new_start: &TimeOfDay,
    new_end: &TimeOfDay,
    start: &TimeOfDay,
    end: &TimeOfDay,
) -> bool {
    let (s, e) = (new_start.minutes_from_midnight(), new_end.minutes_from_midnight());
    let (os, oe) = (start.minutes_from_midnight(), end.minutes_from_midnight());

    (s < oe && s >= os) || (e <= oe && e > os) || (s >= os && e <= oe) || (s <= os && e >= oe)
}
