//! Natural language quick-add parser.
//!
//! Parses strings like "meet Alex tomorrow 14:00-15:00 @Work #sales !!!"
//! into structured task fields.

use chrono::{DateTime, FixedOffset};
use tracing::{debug, trace};

use super::extract::{self, Context, Extractor, Scan};
use super::types::{ParsedInput, ParserOptions};
use crate::core::reference_now;

/// Extraction steps, in the order they run.
const PIPELINE: [(&str, Extractor); 9] = [
    ("focus", extract::focus),
    ("priority", extract::priority),
    ("kind", extract::kind),
    ("tags", extract::tags),
    ("list_hint", extract::list_hint),
    ("relative_date", extract::relative_date),
    ("weekday", extract::weekday),
    ("explicit_date", extract::explicit_date),
    ("time", extract::time),
];

/// A configured quick-add parser.
#[derive(Debug, Clone, Default)]
pub struct InputParser {
    options: ParserOptions,
}

impl InputParser {
    /// Create a parser with the given options.
    #[must_use]
    pub const fn new(options: ParserOptions) -> Self {
        Self { options }
    }

    /// The options this parser runs with.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse against the current wall-clock instant.
    #[must_use]
    pub fn parse(&self, raw: &str) -> ParsedInput {
        self.parse_at(raw, reference_now(self.options.utc_offset_minutes))
    }

    /// Parse against an explicit reference instant.
    ///
    /// Relative words ("today", "tomorrow", weekday names) resolve against
    /// `now`'s calendar day, and instants carry `now`'s offset.
    #[must_use]
    pub fn parse_at(&self, raw: &str, now: DateTime<FixedOffset>) -> ParsedInput {
        let ctx = Context {
            now,
            options: &self.options,
        };

        let trimmed = raw.trim();
        let mut scan = Scan::new(trimmed);
        for (name, step) in PIPELINE {
            scan = step(scan, &ctx);
            trace!(step = name, remaining = %scan.text, "extraction step");
        }

        let mut parsed = scan.parsed;
        parsed.title = finalize_title(&scan.text, trimmed);

        debug!(
            title = %parsed.title,
            date = ?parsed.date,
            time = ?parsed.time,
            tags = parsed.tags.len(),
            list = ?parsed.list_hint,
            "parsed quick-add input"
        );
        parsed
    }
}

/// Parse a quick-add string against the current local time.
///
/// # Examples
///
/// ```
/// use quickadd::features::nlp::{parse_input, Priority};
///
/// let parsed = parse_input("buy milk #errands !!");
/// assert_eq!(parsed.title, "buy milk");
/// assert_eq!(parsed.tags, vec!["errands"]);
/// assert_eq!(parsed.priority, Some(Priority::Medium));
/// ```
#[must_use]
pub fn parse_input(raw: &str) -> ParsedInput {
    InputParser::default().parse(raw)
}

/// Parse a quick-add string against a pinned reference instant.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use quickadd::features::nlp::parse_input_at;
///
/// let now = DateTime::parse_from_rfc3339("2025-06-10T09:30:00+00:00").unwrap();
/// let parsed = parse_input_at("Call mom tomorrow 14:00", now);
/// assert_eq!(parsed.title, "Call mom");
/// assert_eq!(parsed.date_iso().as_deref(), Some("2025-06-11"));
/// ```
#[must_use]
pub fn parse_input_at(raw: &str, now: DateTime<FixedOffset>) -> ParsedInput {
    InputParser::default().parse_at(raw, now)
}

/// Collapse whitespace; fall back to the trimmed input when nothing is left.
fn finalize_title(remaining: &str, trimmed_raw: &str) -> String {
    let title = remaining.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        trimmed_raw.to_string()
    } else {
        title
    }
}
