//! Natural language parsing for quick-add task entry.
//!
//! This module turns free text like:
//! - "Call mom tomorrow 14:00"
//! - "Team sync 14:00-15:00 @Work #sales !!!"
//! - "31.12.2025 Plan party *"
//!
//! into a [`ParsedInput`].

mod extract;
mod parser;
mod types;

pub use parser::{parse_input, parse_input_at, InputParser};
pub use types::{ParsedInput, ParserOptions, Priority, PriorityMerge, TaskKind};
