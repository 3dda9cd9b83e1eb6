//! JSON output formatting for quickadd.

use serde::Serialize;

use crate::error::QuickAddError;
use crate::features::draft::TaskDraft;
use crate::features::nlp::ParsedInput;

/// Format a parse result as JSON.
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_parsed_json(parsed: &ParsedInput) -> Result<String, QuickAddError> {
    to_json(parsed)
}

/// Format a task draft as JSON
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn format_draft_json(draft: &TaskDraft) -> Result<String, QuickAddError> {
    to_json(draft)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `QuickAddError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, QuickAddError> {
    Ok(serde_json::to_string_pretty(value)?)
}
