//! Shared building blocks used across several indicators.

pub mod spells;

pub use spells::{cdd_max, consecutive_event_count, wet_days, WET_DAY_THRESHOLD};
