//! Date and time helpers shared by the parser and the task draft.
//!
//! Everything here works on an explicit reference instant so callers can pin
//! "now" instead of depending on the wall clock.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime,
    TimeZone, Utc, Weekday,
};

/// Current instant, either in the system's local offset or in a fixed one.
///
/// Offsets outside ±24h are ignored and the local offset is used instead.
#[must_use]
pub fn reference_now(utc_offset_minutes: Option<i32>) -> DateTime<FixedOffset> {
    utc_offset_minutes
        .and_then(|minutes| FixedOffset::east_opt(minutes.saturating_mul(60)))
        .map_or_else(
            || Local::now().fixed_offset(),
            |offset| Utc::now().with_timezone(&offset),
        )
}

/// Parse an RFC 3339 instant such as `2025-06-10T09:30:00+03:00`.
#[must_use]
pub fn parse_instant(input: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input.trim()).ok()
}

/// Map a weekday name or abbreviation to a [`Weekday`].
#[must_use]
pub fn weekday_from_name(input: &str) -> Option<Weekday> {
    match input.to_lowercase().as_str() {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" | "tues" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" | "thur" | "thurs" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Next occurrence of `target` strictly after `today`.
///
/// When `today` already is `target` the result is one week later.
#[must_use]
pub fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let mut days_until = (i64::from(target.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday())
        + 7)
        % 7;

    if days_until == 0 {
        days_until = 7;
    }

    today + Duration::days(days_until)
}

/// Expand a 2- or 4-digit year token. Two-digit years land in the 2000s.
#[must_use]
pub fn expand_year(token: &str) -> Option<i32> {
    match token.len() {
        2 => format!("20{token}").parse().ok(),
        4 => token.parse().ok(),
        _ => None,
    }
}

/// Build a calendar date, rejecting impossible ones (`31.02`, month 13).
#[must_use]
pub fn calendar_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Build a wall-clock time, rejecting hours above 23 and minutes above 59.
#[must_use]
pub fn clock(hour: u32, minute: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse an `H:MM` / `HH:MM` clock string.
#[must_use]
pub fn parse_clock(input: &str) -> Option<NaiveTime> {
    let (hour, minute) = input.trim().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    clock(hour.parse().ok()?, minute.parse().ok()?)
}

/// Combine a date and a time into an instant in `offset`.
#[must_use]
pub fn combine(date: NaiveDate, time: NaiveTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
}

/// Format a time as `HH:MM`.
#[must_use]
pub fn format_hhmm(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter storing an optional time as `"HH:MM"`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some(time)` as `"HH:MM"`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&super::format_hhmm(*t)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional `"HH:MM"` string.
    ///
    /// # Errors
    ///
    /// Fails when the string is not a valid clock time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            super::parse_clock(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid time '{s}', expected HH:MM")))
        })
        .transpose()
    }
}

/// Serde adapter storing an optional instant as RFC 3339 with a numeric offset.
///
/// Matches [`DateTime::to_rfc3339`], so UTC is written as `+00:00`, never `Z`.
pub mod rfc3339 {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize `Some(instant)` with [`DateTime::to_rfc3339`].
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(
        instant: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match instant {
            Some(i) => serializer.serialize_str(&i.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional RFC 3339 string (`Z` or a numeric offset).
    ///
    /// # Errors
    ///
    /// Fails when the string is not an RFC 3339 instant.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<FixedOffset>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            super::parse_instant(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid instant '{s}', expected RFC 3339")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_from_name("mon"), Some(Weekday::Mon));
        assert_eq!(weekday_from_name("TUES"), Some(Weekday::Tue));
        assert_eq!(weekday_from_name("Thurs"), Some(Weekday::Thu));
        assert_eq!(weekday_from_name("sunday"), Some(Weekday::Sun));
        assert_eq!(weekday_from_name("someday"), None);
    }

    #[test]
    fn test_next_weekday_rolls_forward() {
        // 2025-06-10 is a Tuesday
        let tuesday = date(2025, 6, 10);
        assert_eq!(next_weekday(tuesday, Weekday::Wed), date(2025, 6, 11));
        assert_eq!(next_weekday(tuesday, Weekday::Mon), date(2025, 6, 16));
        assert_eq!(next_weekday(tuesday, Weekday::Tue), date(2025, 6, 17));
    }

    #[test]
    fn test_expand_year() {
        assert_eq!(expand_year("25"), Some(2025));
        assert_eq!(expand_year("2031"), Some(2031));
        assert_eq!(expand_year("123"), None);
    }

    #[test]
    fn test_calendar_date_validation() {
        assert_eq!(calendar_date(2025, 12, 31), Some(date(2025, 12, 31)));
        assert!(calendar_date(2025, 2, 31).is_none());
        assert!(calendar_date(2025, 13, 1).is_none());
    }

    #[test]
    fn test_clock_validation() {
        assert_eq!(clock(9, 5), NaiveTime::from_hms_opt(9, 5, 0));
        assert!(clock(24, 0).is_none());
        assert!(clock(12, 60).is_none());
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("9:30"), NaiveTime::from_hms_opt(9, 30, 0));
        assert_eq!(parse_clock("23:59"), NaiveTime::from_hms_opt(23, 59, 0));
        assert!(parse_clock("25:00").is_none());
        assert!(parse_clock("9:3").is_none());
        assert!(parse_clock("noon").is_none());
    }

    #[test]
    fn test_combine_uses_offset() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let instant = combine(date(2025, 6, 10), clock(14, 0).unwrap(), offset).unwrap();
        assert_eq!(instant.to_rfc3339(), "2025-06-10T14:00:00+03:00");
    }

    #[test]
    fn test_reference_now_fixed_offset() {
        let now = reference_now(Some(180));
        assert_eq!(now.offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn test_reference_now_rejects_bad_offset() {
        // Falls back to the local offset instead of panicking.
        let _ = reference_now(Some(100_000));
    }

    #[test]
    fn test_parse_instant() {
        let instant = parse_instant("2025-06-10T09:30:00+00:00").unwrap();
        assert_eq!(instant.date_naive(), date(2025, 6, 10));
        assert!(parse_instant("yesterday").is_none());
    }

    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Stamped {
        #[serde(default, with = "rfc3339")]
        at: Option<DateTime<FixedOffset>>,
    }

    #[test]
    fn test_rfc3339_keeps_numeric_utc_offset() {
        let at = parse_instant("2025-06-10T14:00:00Z");
        let json = serde_json::to_string(&Stamped { at }).unwrap();
        assert_eq!(json, r#"{"at":"2025-06-10T14:00:00+00:00"}"#);

        let back: Stamped = serde_json::from_str(r#"{"at":"2025-06-10T14:00:00Z"}"#).unwrap();
        assert_eq!(back.at, at);

        let none: Stamped = serde_json::from_str(r#"{"at":null}"#).unwrap();
        assert!(none.at.is_none());
        assert!(serde_json::from_str::<Stamped>(r#"{"at":"tomorrow"}"#).is_err());
    }
}
