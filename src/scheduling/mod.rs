//! Scheduling module for meeting organization and slot polling.
//!
//! This module provides the core scheduling functionality:
//!
//! - **Categories**: labeled groupings under which meetings are organized
//! - **Meetings**: schedulable events with a title, topic, and category
//! - **Slots**: candidate date + time ranges proposed for a meeting
//! - **Polls**: open/close voting phases collecting participant preferences
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    ScheduleStore                         │
//! │  ┌───────────────┐ ┌───────────────┐ ┌───────────────┐  │
//! │  │  categories   │ │   meetings    │ │ slots + prefs │  │
//! │  │  (BTreeSet)   │ │  (BTreeMap)   │ │ (Vec/BTreeSet)│  │
//! │  └───────────────┘ └───────────────┘ └───────────────┘  │
//! │                                                          │
//! │  category ops · meeting ops · slot ops · poll ops        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! One store instance holds all state for a logical session; transport,
//! persistence, and authentication layers are expected to wrap it from the
//! outside.
//!
//! # Usage
//!
//! ```
//! use convene::{Result, ScheduleStore};
//!
//! fn main() -> Result<()> {
//!     let mut store = ScheduleStore::new();
//!     store.add_categories(["planning", "retro"]);
//!
//!     let meeting = store.add_meeting("Sprint review", "Q2 demo", "planning")?;
//!     store.add_option(&meeting, "2024-3-5", "14:00", "15:30")?;
//!
//!     store.open_poll(&meeting)?;
//!     store.select_preference("ada@example.com", "Ada", "Lovelace", &meeting, "2024-3-5", "14:00-15:30")?;
//!
//!     let winners = store.close_poll(&meeting)?;
//!     assert_eq!(winners, vec!["2024-03-05T14:00-15:30=1"]);
//!     Ok(())
//! }
//! ```

mod poll;
mod slots;
mod store;
mod time;
pub mod types;

pub use store::ScheduleStore;
pub use time::TimeOfDay;
pub use types::{parse_date, parse_time_range, Meeting, Preference, ScheduleStats, Slot};
