//! Data types produced by the quick-add parser.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::{hhmm, rfc3339};

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Priority {
    /// No priority set (`p0`).
    #[default]
    None,
    /// Low priority (`!` or `p1`)
    Low,
    /// Medium priority (`!!` or `p2`)
    Medium,
    /// High priority (`!!!` or more, or `p3`)
    High,
}

impl Priority {
    /// Numeric level, 0 = none through 3 = high.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Priority for a level, saturating at [`Priority::High`].
    #[must_use]
    pub const fn from_level(level: usize) -> Self {
        match level {
            0 => Self::None,
            1 => Self::Low,
            2 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 3 {
            return Err(format!("priority must be between 0 and 3, got {value}"));
        }
        Ok(Self::from_level(usize::from(value)))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// What sort of entry the task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Plain task.
    #[default]
    Task,
    /// Meeting or appointment.
    Meeting,
    /// Study session, lesson or lecture.
    Study,
    /// Anything else.
    Other,
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Task => "task",
            Self::Meeting => "meeting",
            Self::Study => "study",
            Self::Other => "other",
        })
    }
}

/// How several priority markers in one input are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityMerge {
    /// Scan left to right, the last marker wins.
    #[default]
    Last,
    /// The highest marker wins.
    Max,
}

/// Tunables for the parser, loaded from the `parser` config section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Merge policy when several priority markers are present.
    pub priority_merge: PriorityMerge,
    /// Recognise `p0`..`p3` words as priority markers.
    pub priority_keywords: bool,
    /// Resolve weekday names (`fri`, `monday`) to dates.
    pub weekday_names: bool,
    /// Treat the word `focus` like the `*` marker.
    pub focus_word: bool,
    /// Fixed UTC offset for "now" when no instant is injected.
    pub utc_offset_minutes: Option<i32>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            priority_merge: PriorityMerge::Last,
            priority_keywords: false,
            weekday_names: true,
            focus_word: true,
            utc_offset_minutes: None,
        }
    }
}

/// Structured fields extracted from one quick-add string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedInput {
    /// Remaining free text after structured tokens are stripped.
    pub title: String,
    /// Calendar day, explicit or relative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Start time of day.
    #[serde(default, with = "hhmm", skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Start instant; only set together with `date` and `time`.
    #[serde(default, with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<FixedOffset>>,
    /// End instant; only set for explicit time ranges.
    #[serde(default, with = "rfc3339", skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<FixedOffset>>,
    /// Priority from `!` runs (or `pN` words).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Kind inferred from keywords.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TaskKind>,
    /// Hashtags without the `#`, first occurrence order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// First `@name` token without the `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_hint: Option<String>,
    /// A focus marker was present.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub focus_flag: bool,
    /// `date` was not written in the text; it is the reference day, filled
    /// in because a time was found.
    #[serde(skip)]
    pub date_from_reference: bool,
}

impl ParsedInput {
    /// Whether a date or a time was resolved.
    #[must_use]
    pub const fn has_schedule(&self) -> bool {
        self.date.is_some() || self.time.is_some()
    }

    /// The detected kind, or [`TaskKind::Task`].
    #[must_use]
    pub fn kind_or_default(&self) -> TaskKind {
        self.kind.unwrap_or_default()
    }

    /// Numeric priority, 0 when none was given.
    #[must_use]
    pub fn priority_value(&self) -> u8 {
        self.priority.unwrap_or_default().value()
    }

    /// The date as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_iso(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}
