use std::fmt::Write;

use colored::Colorize;

use crate::core::format_hhmm;
use crate::features::draft::TaskDraft;
use crate::features::nlp::{ParsedInput, Priority};

/// Format a parse result for the terminal
pub fn format_parsed_pretty(parsed: &ParsedInput) -> String {
    let mut output = format!("{}\n", "Parsed input".yellow().bold());
    writeln!(output, "  {} {}", "Title:".cyan().bold(), parsed.title).ok();

    if let Some(date) = parsed.date_iso() {
        writeln!(output, "  {} {date}", "Date:".cyan()).ok();
    }
    if let Some(time) = parsed.time {
        writeln!(output, "  {} {}", "Time:".cyan(), format_hhmm(time)).ok();
    }
    if let Some(start) = parsed.start_at {
        writeln!(output, "  {} {}", "Starts:".cyan(), start.to_rfc3339()).ok();
    }
    if let Some(end) = parsed.end_at {
        writeln!(output, "  {} {}", "Ends:".cyan(), end.to_rfc3339()).ok();
    }
    if !parsed.tags.is_empty() {
        writeln!(output, "  {} {}", "Tags:".yellow(), hashtags(&parsed.tags)).ok();
    }
    if let Some(list) = &parsed.list_hint {
        writeln!(output, "  {} @{list}", "List:".magenta()).ok();
    }
    if let Some(priority) = parsed.priority.filter(|p| *p != Priority::None) {
        writeln!(output, "  {} {priority}", "Priority:".red().bold()).ok();
    }
    if let Some(kind) = parsed.kind {
        writeln!(output, "  {} {kind}", "Kind:".blue()).ok();
    }
    if parsed.focus_flag {
        writeln!(output, "  {}", "Focus".green().bold()).ok();
    }

    output
}

/// Format a task draft for the terminal
pub fn format_draft_pretty(draft: &TaskDraft) -> String {
    let mut output = format!("{}\n", "Task draft".yellow().bold());
    writeln!(output, "  {} {}", "Title:".cyan().bold(), draft.title).ok();

    match (draft.date, draft.time) {
        (Some(date), Some(time)) => {
            writeln!(output, "  {} {date} {}", "When:".cyan(), format_hhmm(time)).ok();
        },
        (Some(date), None) => {
            writeln!(output, "  {} {date} {}", "When:".cyan(), "(all day)".dimmed()).ok();
        },
        _ => {},
    }
    if let Some(end) = draft.end_at {
        writeln!(output, "  {} {}", "Ends:".cyan(), end.to_rfc3339()).ok();
    }
    if !draft.tags.is_empty() {
        writeln!(output, "  {} {}", "Tags:".yellow(), hashtags(&draft.tags)).ok();
    }
    if let Some(list) = &draft.list_hint {
        writeln!(output, "  {} @{list}", "List:".magenta()).ok();
    }
    writeln!(output, "  {} {}", "Priority:".red().bold(), draft.priority).ok();
    writeln!(output, "  {} {}", "Kind:".blue(), draft.kind).ok();
    if draft.focus_flag {
        writeln!(output, "  {}", "Focus".green().bold()).ok();
    }

    output
}

fn hashtags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::TaskKind;

    #[test]
    fn test_format_parsed_pretty() {
        let parsed = ParsedInput {
            title: "test task".to_string(),
            tags: vec!["work".to_string()],
            list_hint: Some("Home".to_string()),
            priority: Some(Priority::High),
            ..Default::default()
        };

        let result = format_parsed_pretty(&parsed);
        assert!(result.contains("test task"));
        assert!(result.contains("#work"));
        assert!(result.contains("@Home"));
        assert!(result.contains("high"));
        assert!(!result.contains("Date:"));
    }

    #[test]
    fn test_format_parsed_pretty_hides_zero_priority() {
        let parsed = ParsedInput {
            title: "chores".to_string(),
            priority: Some(Priority::None),
            ..Default::default()
        };
        assert!(!format_parsed_pretty(&parsed).contains("Priority:"));
    }

    #[test]
    fn test_format_draft_pretty_all_day() {
        let draft = TaskDraft {
            title: "Plan party".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 12, 31),
            time: None,
            all_day: true,
            start_at: None,
            end_at: None,
            priority: Priority::None,
            kind: TaskKind::Task,
            tags: Vec::new(),
            list_hint: None,
            focus_flag: false,
        };

        let result = format_draft_pretty(&draft);
        assert!(result.contains("Plan party"));
        assert!(result.contains("2025-12-31"));
        assert!(result.contains("all day"));
    }
}
