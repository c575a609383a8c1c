//! Poll lifecycle and preference collection for the schedule store.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{Result, ScheduleError};

use super::store::ScheduleStore;
use super::types::{parse_date, parse_time_range, Preference, Slot};

impl ScheduleStore {
    // ========================================================================
    // Poll Lifecycle
    // ========================================================================

    /// Open the poll of a meeting, so preferences can be collected for its
    /// slots. Opening an already-open poll is a no-op.
    pub fn open_poll(&mut self, meeting_id: &str) -> Result<()> {
        let meeting = self.get_meeting_mut(meeting_id)?;
        meeting.poll_open = true;
        debug!("Opened poll for meeting {meeting_id}");
        Ok(())
    }

    /// Record a participant's preference for a slot of a meeting.
    ///
    /// The poll must be open and the slot must have been added beforehand;
    /// `slot_label` is the slot's time range, `"hh:mm-hh:mm"`. Recording the
    /// exact same (participant, slot) tuple again is deduplicated. Returns
    /// the number of preferences now recorded for that slot.
    pub fn select_preference(
        &mut self,
        email: impl Into<String>,
        name: impl Into<String>,
        surname: impl Into<String>,
        meeting_id: &str,
        date: &str,
        slot_label: &str,
    ) -> Result<usize> {
        let meeting = self.get_meeting(meeting_id)?;
        if !meeting.poll_open {
            return Err(ScheduleError::PollNotOpen(meeting_id.to_string()));
        }

        let date = parse_date(date)?;
        let (start, end) = parse_time_range(slot_label)?;
        let wanted = Slot::new(meeting_id, date, start, end);

        let slot = self
            .slots
            .iter()
            .find(|s| **s == wanted)
            .cloned()
            .ok_or_else(|| ScheduleError::SlotNotFound(wanted.to_string()))?;

        let preference = Preference::new(slot.clone(), email, name, surname);
        if self.preferences.insert(preference) {
            debug!("Recorded preference for slot {slot} of meeting {meeting_id}");
        }

        Ok(self.count_for_slot(&slot))
    }

    /// Close the poll of a meeting and return the most preferred options.
    ///
    /// Each winning option is rendered as `"YYYY-MM-DDThh:mm-hh:mm=<count>"`.
    /// Every slot tied at the maximum count is reported; the result is empty
    /// when no preferences were recorded.
    pub fn close_poll(&mut self, meeting_id: &str) -> Result<Vec<String>> {
        let meeting = self.get_meeting_mut(meeting_id)?;
        meeting.poll_open = false;
        debug!("Closed poll for meeting {meeting_id}");

        let counts = self.preference_counts_by_slot(meeting_id);
        let max = counts.values().copied().max().unwrap_or(0);

        Ok(counts
            .into_iter()
            .filter(|(_, count)| *count == max)
            .map(|(slot, count)| format!("{slot}={count}"))
            .collect())
    }

    /// All preferences expressed for a meeting, each rendered as
    /// `"YYYY-MM-DDThh:mm-hh:mm=<email>"`, ordered by slot then email.
    pub fn list_preferences(&self, meeting_id: &str) -> Result<Vec<String>> {
        self.get_meeting(meeting_id)?;

        Ok(self
            .preferences
            .iter()
            .filter(|p| p.slot.meeting_id == meeting_id)
            .map(|p| format!("{}={}", p.slot, p.email))
            .collect())
    }

    /// Preference counts for a meeting's voted slots, grouped by date.
    ///
    /// Keys are zero-padded `"YYYY-MM-DD"` dates; each value lists
    /// `"hh:mm-hh:mm=<count>"` entries ordered by start time. Slots nobody
    /// voted for do not appear.
    pub fn meeting_preferences(&self, meeting_id: &str) -> Result<BTreeMap<String, Vec<String>>> {
        self.get_meeting(meeting_id)?;

        let mut by_date: BTreeMap<String, Vec<String>> = BTreeMap::new();
        // Counts iterate in slot order, so each date's entries arrive
        // already sorted by start time.
        for (slot, count) in self.preference_counts_by_slot(meeting_id) {
            by_date
                .entry(slot.date.format("%Y-%m-%d").to_string())
                .or_default()
                .push(format!("{}={count}", slot.time_range()));
        }

        Ok(by_date)
    }

    /// Total number of recorded preferences for every meeting, keyed by
    /// meeting id. Meetings without preferences report 0.
    pub fn preference_count(&self) -> BTreeMap<String, usize> {
        self.meetings
            .keys()
            .map(|id| {
                let total = self
                    .preferences
                    .iter()
                    .filter(|p| p.slot.meeting_id == *id)
                    .count();
                (id.clone(), total)
            })
            .collect()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Number of preferences recorded for a specific slot.
    fn count_for_slot(&self, slot: &Slot) -> usize {
        self.preferences.iter().filter(|p| p.slot == *slot).count()
    }

    /// Per-slot preference counts for a meeting, in slot order.
    fn preference_counts_by_slot(&self, meeting_id: &str) -> BTreeMap<Slot, usize> {
        let mut counts: BTreeMap<Slot, usize> = BTreeMap::new();
        for preference in self
            .preferences
            .iter()
            .filter(|p| p.slot.meeting_id == meeting_id)
        {
            *counts.entry(preference.slot.clone()).or_default() += 1;
        }
        counts
    }
}
