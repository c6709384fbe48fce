//! Utility functions

pub mod time;

pub use time::{date_of_millis, day_end_millis, day_start_millis, now_millis, parse_date};
