//! Output formatting for quickadd.
//!
//! This module provides formatters for displaying parse results and task
//! drafts in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::QuickAddError;
use crate::features::draft::TaskDraft;
use crate::features::nlp::ParsedInput;

pub use json::*;
pub use pretty::*;

/// Format a parse result based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_parsed(parsed: &ParsedInput, format: OutputFormat) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_parsed_pretty(parsed)),
        OutputFormat::Json => format_parsed_json(parsed),
    }
}

/// Format a task draft based on output format
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_draft(draft: &TaskDraft, format: OutputFormat) -> Result<String, QuickAddError> {
    match format {
        OutputFormat::Pretty => Ok(format_draft_pretty(draft)),
        OutputFormat::Json => format_draft_json(draft),
    }
}
