//! Task drafts: a parsed quick-add merged with caller overrides.
//!
//! A [`TaskDraft`] is the payload handed to whatever stores tasks. Explicit
//! overrides (form fields, CLI flags) win over parsed values; tags are merged.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{combine, hhmm, rfc3339};
use crate::error::QuickAddError;
use crate::features::nlp::{ParsedInput, Priority, TaskKind};

/// Values supplied alongside the free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskOverrides {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub priority: Option<Priority>,
    pub kind: Option<TaskKind>,
    pub list: Option<String>,
    /// Extra tags, merged with the parsed ones.
    pub tags: Vec<String>,
    pub focus: Option<bool>,
}

/// A task ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hhmm")]
    pub time: Option<NaiveTime>,
    /// Scheduled for a day without a time.
    pub all_day: bool,
    #[serde(default, with = "rfc3339")]
    pub start_at: Option<DateTime<FixedOffset>>,
    #[serde(default, with = "rfc3339")]
    pub end_at: Option<DateTime<FixedOffset>>,
    pub priority: Priority,
    pub kind: TaskKind,
    pub tags: Vec<String>,
    #[serde(default)]
    pub list_hint: Option<String>,
    pub focus_flag: bool,
}

impl TaskDraft {
    /// Merge `parsed` with `overrides`.
    ///
    /// A time without a date in the text is scheduled on `reference_day` (the
    /// day the caller has selected), and a parsed range keeps its length.
    /// Instants are built in `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`QuickAddError::EmptyTitle`] if the resulting title is blank.
    pub fn build(
        parsed: ParsedInput,
        overrides: TaskOverrides,
        reference_day: NaiveDate,
        offset: FixedOffset,
    ) -> Result<Self, QuickAddError> {
        let title = overrides
            .title
            .unwrap_or(parsed.title)
            .trim()
            .to_string();
        if title.is_empty() {
            return Err(QuickAddError::EmptyTitle);
        }

        let time = overrides.time.or(parsed.time);
        // A date the parser only filled in for a bare time yields to the selected day.
        let parsed_date = parsed.date.filter(|_| !parsed.date_from_reference);
        let date = match overrides.date.or(parsed_date) {
            None if time.is_some() => Some(reference_day),
            date => date,
        };

        let (start_at, end_at) = match (date, time) {
            (Some(date), Some(time)) => {
                let start = combine(date, time, offset);
                (start, shift_end(parsed.start_at, parsed.end_at, start))
            },
            _ => (None, None),
        };

        let mut tags = parsed.tags;
        for tag in overrides.tags {
            let trimmed = tag.trim().to_string();
            if !trimmed.is_empty() && !tags.contains(&trimmed) {
                tags.push(trimmed);
            }
        }

        let list_hint = overrides
            .list
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .or(parsed.list_hint);

        let draft = Self {
            title,
            date,
            time,
            all_day: date.is_some() && time.is_none(),
            start_at,
            end_at,
            priority: overrides.priority.or(parsed.priority).unwrap_or_default(),
            kind: overrides.kind.or(parsed.kind).unwrap_or_default(),
            tags,
            list_hint,
            focus_flag: overrides.focus.unwrap_or(parsed.focus_flag),
        };

        debug!(title = %draft.title, date = ?draft.date, all_day = draft.all_day, "built task draft");
        Ok(draft)
    }
}

/// Move a parsed end by however far the start moved, keeping the duration.
fn shift_end(
    old_start: Option<DateTime<FixedOffset>>,
    old_end: Option<DateTime<FixedOffset>>,
    new_start: Option<DateTime<FixedOffset>>,
) -> Option<DateTime<FixedOffset>> {
    let (old_start, old_end, new_start) = (old_start?, old_end?, new_start?);
    old_end
        .checked_add_signed(new_start - old_start)
        .map(|end| end.with_timezone(new_start.offset()))
}
