//! The schedule store: the single owned aggregate holding all state.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::error::{Result, ScheduleError};

use super::types::{Meeting, Preference, ScheduleStats, Slot};

/// In-memory store for categories, meetings, slot options, and preferences.
///
/// One instance per logical server or session; callers pass it by reference
/// to all operation handlers. The store is synchronous and single-threaded.
/// If concurrent callers are ever introduced, the whole store must sit
/// behind one coarse lock, since check-then-insert sequences (overlap check,
/// preference dedup) must appear atomic.
#[derive(Debug, Default)]
pub struct ScheduleStore {
    /// Registered category labels, ordered for deterministic listing.
    pub(crate) categories: BTreeSet<String>,
    /// Meetings indexed by id.
    pub(crate) meetings: BTreeMap<String, Meeting>,
    /// All slot options, in insertion order.
    pub(crate) slots: Vec<Slot>,
    /// Recorded preferences; set semantics dedup exact repeat tuples.
    pub(crate) preferences: BTreeSet<Preference>,
    /// Next meeting id to assign.
    next_id: u64,
}

impl ScheduleStore {
    /// Create an empty store. The first meeting id assigned is "1".
    pub fn new() -> Self {
        Self {
            categories: BTreeSet::new(),
            meetings: BTreeMap::new(),
            slots: Vec::new(),
            preferences: BTreeSet::new(),
            next_id: 1,
        }
    }

    // ========================================================================
    // Category Management
    // ========================================================================

    /// Register meeting categories.
    ///
    /// Can be invoked any number of times; duplicates are silently ignored.
    pub fn add_categories<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            let label = label.into();
            if self.categories.insert(label.clone()) {
                debug!("Registered category: {label}");
            }
        }
    }

    /// All registered categories, in ascending lexicographic order.
    pub fn categories(&self) -> Vec<String> {
        self.categories.iter().cloned().collect()
    }

    // ========================================================================
    // Meeting Management
    // ========================================================================

    /// Create a meeting under an existing category and return its id.
    ///
    /// Ids are decimal strings assigned sequentially from "1" and never
    /// reused. Fails with [`ScheduleError::CategoryNotFound`] without
    /// consuming an id when the category is unknown.
    pub fn add_meeting(
        &mut self,
        title: impl Into<String>,
        topic: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<String> {
        let category = category.into();
        if !self.categories.contains(&category) {
            return Err(ScheduleError::CategoryNotFound(category));
        }

        let id = self.next_id.to_string();
        self.next_id += 1;

        let meeting = Meeting::new(id.clone(), title, topic, category.clone());
        debug!("Created meeting {id} in category {category}: {}", meeting.title);
        self.meetings.insert(id.clone(), meeting);

        Ok(id)
    }

    /// Ids of all meetings in the given category, ascending by id.
    pub fn meetings(&self, category: &str) -> Vec<String> {
        let mut ids: Vec<String> = self
            .meetings
            .values()
            .filter(|m| m.category == category)
            .map(|m| m.id.clone())
            .collect();
        // Meeting ids are decimal strings; sort them numerically so "10"
        // lands after "9".
        ids.sort_by_key(|id| id.parse::<u64>().unwrap_or(u64::MAX));
        ids
    }

    /// Title of the meeting with the given id.
    pub fn meeting_title(&self, meeting_id: &str) -> Result<String> {
        Ok(self.get_meeting(meeting_id)?.title.clone())
    }

    /// Topic of the meeting with the given id.
    pub fn meeting_topic(&self, meeting_id: &str) -> Result<String> {
        Ok(self.get_meeting(meeting_id)?.topic.clone())
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Summary counters for the store.
    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats {
            categories: self.categories.len(),
            meetings: self.meetings.len(),
            slots: self.slots.len(),
            preferences: self.preferences.len(),
            open_polls: self.meetings.values().filter(|m| m.poll_open).count(),
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Look up a meeting, surfacing a typed error for unknown ids.
    pub(crate) fn get_meeting(&self, meeting_id: &str) -> Result<&Meeting> {
        self.meetings
            .get(meeting_id)
            .ok_or_else(|| ScheduleError::MeetingNotFound(meeting_id.to_string()))
    }

    /// Mutable meeting lookup with the same error contract.
    pub(crate) fn get_meeting_mut(&mut self, meeting_id: &str) -> Result<&mut Meeting> {
        self.meetings
            .get_mut(meeting_id)
            .ok_or_else(|| ScheduleError::MeetingNotFound(meeting_id.to_string()))
    }
}
