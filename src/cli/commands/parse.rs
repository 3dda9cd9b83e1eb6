//! `quickadd parse` implementation.

use crate::cli::args::{OutputFormat, ParseArgs};
use crate::config::Config;
use crate::error::QuickAddError;
use crate::features::nlp::InputParser;
use crate::output::format_parsed;

/// Execute the parse command.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn parse(args: ParseArgs, config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    let parser = InputParser::new(config.parser.clone());
    let parsed = match args.now {
        Some(now) => parser.parse_at(&args.text, now),
        None => parser.parse(&args.text),
    };
    format_parsed(&parsed, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse_instant;

    fn args(text: &str) -> ParseArgs {
        ParseArgs {
            text: text.to_string(),
            now: parse_instant("2025-06-10T09:30:00+00:00"),
        }
    }

    #[test]
    fn test_parse_json() {
        let output = parse(args("Call mom tomorrow 14:00"), &Config::default(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["title"], "Call mom");
        assert_eq!(value["date"], "2025-06-11");
        assert_eq!(value["time"], "14:00");
        assert_eq!(value["startAt"], "2025-06-11T14:00:00+00:00");
    }

    #[test]
    fn test_parse_pretty() {
        let output = parse(args("meet Alex #urgent !!"), &Config::default(), OutputFormat::Pretty).unwrap();
        assert!(output.contains("meet Alex"));
        assert!(output.contains("#urgent"));
        assert!(output.contains("meeting"));
    }
}
