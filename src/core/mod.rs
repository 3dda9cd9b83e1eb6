//! Core utilities for quickadd.
//!
//! Date/time helpers shared by the parser and the task draft.

mod datetime;

pub use datetime::{
    calendar_date, clock, combine, expand_year, format_hhmm, hhmm, next_weekday, parse_clock,
    parse_instant, reference_now, rfc3339, weekday_from_name,
};
