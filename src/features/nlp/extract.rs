//! Individual extraction steps of the quick-add pipeline.
//!
//! Each step takes the current [`Scan`] and returns the next one. A step that
//! claims a token cuts it out of the working text, so later steps never see it.

use std::ops::Range;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::types::{ParsedInput, ParserOptions, Priority, PriorityMerge, TaskKind};
use crate::core::{calendar_date, clock, combine, expand_year, next_weekday, weekday_from_name};

/// Inputs shared by every step of one parse call.
pub(super) struct Context<'a> {
    /// Reference instant, read once per call.
    pub now: DateTime<FixedOffset>,
    pub options: &'a ParserOptions,
}

impl Context<'_> {
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    pub fn offset(&self) -> FixedOffset {
        *self.now.offset()
    }
}

/// Working state threaded through the pipeline.
#[derive(Debug, Clone, Default)]
pub(super) struct Scan {
    /// Text not yet claimed by any step.
    pub text: String,
    pub parsed: ParsedInput,
}

impl Scan {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            parsed: ParsedInput::default(),
        }
    }

    /// Remove `span` from the working text, leaving a space behind.
    fn cut(mut self, span: Range<usize>) -> Self {
        self.text.replace_range(span, " ");
        self
    }
}

pub(super) type Extractor = fn(Scan, &Context<'_>) -> Scan;

// Compiled regex patterns
static FOCUS_STAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|\s)\*+").unwrap_or_else(|e| panic!("Invalid focus regex: {e}")));

static FOCUS_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bfocus\b").unwrap_or_else(|e| panic!("Invalid focus word regex: {e}"))
});

static BANG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!+").unwrap_or_else(|e| panic!("Invalid priority regex: {e}")));

static PRIORITY_MARK: Lazy<Regex> = Lazy::new(|| {
    // !, !!, !!! ... or p0..p3
    Regex::new(r"!+|(?i:\bp([0-3])\b)")
        .unwrap_or_else(|e| panic!("Invalid priority keyword regex: {e}"))
});

static MEETING_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:meet|встреч)").unwrap_or_else(|e| panic!("Invalid meeting regex: {e}"))
});

static STUDY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:study|lesson|lecture|учеб|урок|курс|лекц)")
        .unwrap_or_else(|e| panic!("Invalid study regex: {e}"))
});

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#([\p{L}\p{N}_-]+)").unwrap_or_else(|e| panic!("Invalid tag regex: {e}"))
});

static LIST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([\p{L}\p{N}_-]+)").unwrap_or_else(|e| panic!("Invalid list regex: {e}"))
});

static TOMORROW_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:tomorrow|завтра)\b")
        .unwrap_or_else(|e| panic!("Invalid tomorrow regex: {e}"))
});

static TODAY_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:today|сегодня)\b").unwrap_or_else(|e| panic!("Invalid today regex: {e}"))
});

static WEEKDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(monday|mon|tuesday|tues|tue|wednesday|wed|thursday|thurs|thur|thu|friday|fri|saturday|sat|sunday|sun)\b",
    )
    .unwrap_or_else(|e| panic!("Invalid weekday regex: {e}"))
});

static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b")
        .unwrap_or_else(|e| panic!("Invalid ISO date regex: {e}"))
});

static NUMERIC_DATE: Lazy<Regex> = Lazy::new(|| {
    // 31.12, 31/12/25, 1-7-2026
    Regex::new(r"\b(\d{1,2})[./-](\d{1,2})(?:[./-](\d{4}|\d{2}))?\b")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

static TIME_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2}):(\d{2})\s*[-–—]\s*(\d{1,2}):(\d{2})\b")
        .unwrap_or_else(|e| panic!("Invalid time range regex: {e}"))
});

static SINGLE_TIME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2}):(\d{2})\b").unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// `*` marker (and optionally the word `focus`).
pub(super) fn focus(mut scan: Scan, ctx: &Context<'_>) -> Scan {
    if FOCUS_STAR.is_match(&scan.text) {
        scan.parsed.focus_flag = true;
        scan.text = FOCUS_STAR.replace_all(&scan.text, " ").into_owned();
    }

    if ctx.options.focus_word && FOCUS_WORD.is_match(&scan.text) {
        scan.parsed.focus_flag = true;
        scan.text = FOCUS_WORD.replace_all(&scan.text, " ").into_owned();
    }

    scan
}

/// Runs of `!` and, when enabled, `p0`..`p3` words.
pub(super) fn priority(mut scan: Scan, ctx: &Context<'_>) -> Scan {
    let pattern: &Regex = if ctx.options.priority_keywords {
        &PRIORITY_MARK
    } else {
        &BANG_RUN
    };

    let levels: Vec<usize> = pattern
        .captures_iter(&scan.text)
        .filter_map(|caps| match caps.get(1) {
            Some(digit) => digit.as_str().parse().ok(),
            None => caps.get(0).map(|m| m.as_str().len()),
        })
        .collect();

    let merged = match ctx.options.priority_merge {
        PriorityMerge::Last => levels.last().copied(),
        PriorityMerge::Max => levels.iter().max().copied(),
    };

    if let Some(level) = merged {
        scan.parsed.priority = Some(Priority::from_level(level));
        scan.text = pattern.replace_all(&scan.text, " ").into_owned();
    }

    scan
}

/// Kind keywords. Matching text is left in place.
pub(super) fn kind(mut scan: Scan, _ctx: &Context<'_>) -> Scan {
    if MEETING_WORDS.is_match(&scan.text) {
        scan.parsed.kind = Some(TaskKind::Meeting);
    } else if STUDY_WORDS.is_match(&scan.text) {
        scan.parsed.kind = Some(TaskKind::Study);
    }
    scan
}

/// Every `#tag`, de-duplicated by exact text.
pub(super) fn tags(mut scan: Scan, _ctx: &Context<'_>) -> Scan {
    for caps in TAG_PATTERN.captures_iter(&scan.text) {
        if let Some(tag) = caps.get(1) {
            let tag = tag.as_str();
            if !scan.parsed.tags.iter().any(|t| t == tag) {
                scan.parsed.tags.push(tag.to_string());
            }
        }
    }
    scan.text = TAG_PATTERN.replace_all(&scan.text, " ").into_owned();
    scan
}

/// The first `@list` only; later ones stay in the title.
pub(super) fn list_hint(mut scan: Scan, _ctx: &Context<'_>) -> Scan {
    let found = LIST_PATTERN
        .captures(&scan.text)
        .and_then(|caps| Some((caps.get(0)?.range(), caps.get(1)?.as_str().to_string())));

    match found {
        Some((span, name)) => {
            scan.parsed.list_hint = Some(name);
            scan.cut(span)
        },
        None => scan,
    }
}

/// `tomorrow` then `today`. Both checks always run, so `today` wins when both appear.
pub(super) fn relative_date(mut scan: Scan, ctx: &Context<'_>) -> Scan {
    if let Some(span) = TOMORROW_WORDS.find(&scan.text).map(|m| m.range()) {
        scan.parsed.date = Some(ctx.today().succ_opt().unwrap_or_else(|| ctx.today()));
        scan = scan.cut(span);
    }

    if let Some(span) = TODAY_WORDS.find(&scan.text).map(|m| m.range()) {
        scan.parsed.date = Some(ctx.today());
        scan = scan.cut(span);
    }

    scan
}

/// Weekday names resolve to the next such day after today.
pub(super) fn weekday(mut scan: Scan, ctx: &Context<'_>) -> Scan {
    if !ctx.options.weekday_names {
        return scan;
    }

    let found = WEEKDAY_PATTERN.captures(&scan.text).and_then(|caps| {
        let name = caps.get(1)?;
        Some((caps.get(0)?.range(), weekday_from_name(name.as_str())?))
    });

    match found {
        Some((span, target)) => {
            scan.parsed.date = Some(next_weekday(ctx.today(), target));
            scan.cut(span)
        },
        None => scan,
    }
}

/// `YYYY-MM-DD` or `D.M[.Y]` (also `/` and `-`). Impossible dates are skipped.
pub(super) fn explicit_date(mut scan: Scan, ctx: &Context<'_>) -> Scan {
    let default_year = scan.parsed.date.unwrap_or_else(|| ctx.today()).year();

    let found = ISO_DATE
        .captures_iter(&scan.text)
        .find_map(|caps| {
            let date = calendar_date(number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?)?;
            Some((caps.get(0)?.range(), date))
        })
        .or_else(|| {
            NUMERIC_DATE.captures_iter(&scan.text).find_map(|caps| {
                let span = caps.get(0)?.range();
                if touches_clock(&scan.text, &span) {
                    return None;
                }
                let year = match caps.get(3) {
                    Some(year) => expand_year(year.as_str())?,
                    None => default_year,
                };
                let date = calendar_date(year, number(&caps, 2)?, number(&caps, 1)?)?;
                Some((span, date))
            })
        });

    match found {
        Some((span, date)) => {
            scan.parsed.date = Some(date);
            scan.cut(span)
        },
        None => scan,
    }
}

/// `H:MM-H:MM` range, otherwise a single `H:MM`. Out-of-range clocks are skipped.
pub(super) fn time(mut scan: Scan, ctx: &Context<'_>) -> Scan {
    let range = TIME_RANGE.captures_iter(&scan.text).find_map(|caps| {
        let start = clock_at(&caps, 1, 2)?;
        let end = clock_at(&caps, 3, 4)?;
        Some((caps.get(0)?.range(), start, end))
    });

    if let Some((span, start, end)) = range {
        scan.parsed.date_from_reference = scan.parsed.date.is_none();
        let date = scan.parsed.date.unwrap_or_else(|| ctx.today());
        // An end before the start runs past midnight.
        let end_date = if end < start {
            date.succ_opt().unwrap_or(date)
        } else {
            date
        };

        scan.parsed.date = Some(date);
        scan.parsed.time = Some(start);
        scan.parsed.start_at = combine(date, start, ctx.offset());
        scan.parsed.end_at = combine(end_date, end, ctx.offset());
        return scan.cut(span);
    }

    let single = SINGLE_TIME.captures_iter(&scan.text).find_map(|caps| {
        let start = clock_at(&caps, 1, 2)?;
        Some((caps.get(0)?.range(), start))
    });

    match single {
        Some((span, start)) => {
            scan.parsed.date_from_reference = scan.parsed.date.is_none();
            let date = scan.parsed.date.unwrap_or_else(|| ctx.today());
            scan.parsed.date = Some(date);
            scan.parsed.time = Some(start);
            scan.parsed.start_at = combine(date, start, ctx.offset());
            scan.cut(span)
        },
        None => scan,
    }
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

fn clock_at(caps: &Captures<'_>, hour: usize, minute: usize) -> Option<NaiveTime> {
    clock(number(caps, hour)?, number(caps, minute)?)
}

/// Whether a date candidate is really part of a clock like `10:05-11:06`.
fn touches_clock(text: &str, span: &Range<usize>) -> bool {
    text[..span.start].ends_with(':') || text[span.end..].starts_with(':')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(step: Extractor, text: &str, options: &ParserOptions) -> Scan {
        let now = DateTime::parse_from_rfc3339("2025-06-10T09:30:00+00:00").unwrap();
        let ctx = Context { now, options };
        step(Scan::new(text), &ctx)
    }

    fn run_default(step: Extractor, text: &str) -> Scan {
        run(step, text, &ParserOptions::default())
    }

    #[test]
    fn test_cut_leaves_space() {
        let scan = Scan::new("a#tag b").cut(1..5);
        assert_eq!(scan.text, "a  b");
    }

    #[test]
    fn test_focus_requires_standalone_star() {
        let scan = run_default(focus, "fix a*b");
        assert!(!scan.parsed.focus_flag);
        assert_eq!(scan.text, "fix a*b");

        let scan = run_default(focus, "deep work *");
        assert!(scan.parsed.focus_flag);
        assert!(!scan.text.contains('*'));
    }

    #[test]
    fn test_priority_only_strips_when_found() {
        let scan = run_default(priority, "plain text");
        assert!(scan.parsed.priority.is_none());
        assert_eq!(scan.text, "plain text");
    }

    #[test]
    fn test_kind_keeps_text() {
        let scan = run_default(kind, "meeting with Bob");
        assert_eq!(scan.parsed.kind, Some(TaskKind::Meeting));
        assert_eq!(scan.text, "meeting with Bob");
    }

    #[test]
    fn test_list_hint_first_only() {
        let scan = run_default(list_hint, "@a @b");
        assert_eq!(scan.parsed.list_hint.as_deref(), Some("a"));
        assert!(scan.text.contains("@b"));
    }

    #[test]
    fn test_weekday_respects_option() {
        let options = ParserOptions {
            weekday_names: false,
            ..ParserOptions::default()
        };
        let scan = run(weekday, "gym fri", &options);
        assert!(scan.parsed.date.is_none());
        assert_eq!(scan.text, "gym fri");
    }

    #[test]
    fn test_touches_clock() {
        let text = "10:05-11:06";
        assert!(touches_clock(text, &(3..8)));
        assert!(!touches_clock("on 05-11 go", &(3..8)));
    }

    #[test]
    fn test_explicit_date_skips_clock_fragment() {
        let scan = run_default(explicit_date, "10:05-11:06");
        assert!(scan.parsed.date.is_none());
        assert_eq!(scan.text, "10:05-11:06");
    }

    #[test]
    fn test_time_without_date_uses_today() {
        let scan = run_default(time, "call 8:15");
        assert_eq!(scan.parsed.date, NaiveDate::from_ymd_opt(2025, 6, 10));
        assert_eq!(scan.parsed.time, NaiveTime::from_hms_opt(8, 15, 0));
        assert!(scan.parsed.end_at.is_none());
        assert!(scan.parsed.date_from_reference);
    }

    #[test]
    fn test_time_keeps_date_from_text() {
        let options = ParserOptions::default();
        let now = DateTime::parse_from_rfc3339("2025-06-10T09:30:00+00:00").unwrap();
        let ctx = Context { now, options: &options };

        let scan = relative_date(Scan::new("call tomorrow 8:15-9:00"), &ctx);
        let scan = time(scan, &ctx);
        assert_eq!(scan.parsed.date, NaiveDate::from_ymd_opt(2025, 6, 11));
        assert!(!scan.parsed.date_from_reference);
    }
}
