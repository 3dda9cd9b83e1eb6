//! `quickadd draft` implementation.

use crate::cli::args::{DraftArgs, OutputFormat};
use crate::config::Config;
use crate::core::reference_now;
use crate::error::QuickAddError;
use crate::features::draft::{TaskDraft, TaskOverrides};
use crate::features::nlp::{InputParser, Priority};
use crate::output::format_draft;

/// Execute the draft command.
///
/// # Errors
///
/// Returns an error if the draft has no title or output formatting fails.
pub fn draft(args: DraftArgs, config: &Config, format: OutputFormat) -> Result<String, QuickAddError> {
    let now = args
        .input
        .now
        .unwrap_or_else(|| reference_now(config.parser.utc_offset_minutes));
    let parsed = InputParser::new(config.parser.clone()).parse_at(&args.input.text, now);

    let overrides = TaskOverrides {
        title: args.title,
        date: args.date,
        time: args.time,
        priority: args.priority.map(|p| Priority::from_level(usize::from(p))),
        kind: args.kind,
        list: args.list,
        tags: args.tags,
        focus: args.focus.then_some(true),
    };

    let reference_day = args.on.unwrap_or_else(|| now.date_naive());
    let draft = TaskDraft::build(parsed, overrides, reference_day, *now.offset())?;
    format_draft(&draft, format)
}
