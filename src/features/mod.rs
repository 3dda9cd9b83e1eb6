//! Feature implementations for quickadd.
//!
//! - Natural language parsing of quick-add input
//! - Task drafts merging parsed input with caller overrides

pub mod draft;
pub mod nlp;
