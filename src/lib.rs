//! quickadd - natural-language quick-add parsing for task planners
//!
//! Turns free text such as `"Team sync 14:00-15:00 @Work #sales !!!"` into a
//! structured [`ParsedInput`]: title, date, time, start/end instants,
//! priority, kind, tags, list hint and focus flag. The parser is exposed as
//! a library, a CLI and an HTTP endpoint.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod server;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::QuickAddError;
pub use features::nlp::{parse_input, parse_input_at, InputParser, ParsedInput};
