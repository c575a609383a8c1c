//! Convene: in-memory meeting scheduling and slot polling.
//!
//! A library for organizing meetings under categories, proposing candidate
//! time slots, collecting participant preferences while a poll is open, and
//! tallying the most popular slot(s) when it closes.
//!
//! The whole state lives in a single owned [`ScheduleStore`]; the crate has
//! no transport, persistence, or authentication surface. Those are external
//! collaborators that call into the store through plain method invocations.

pub mod error;
pub mod scheduling;

pub use error::{Result, ScheduleError};
pub use scheduling::{
    parse_date, parse_time_range, Meeting, Preference, ScheduleStats, ScheduleStore, Slot,
    TimeOfDay,
};
