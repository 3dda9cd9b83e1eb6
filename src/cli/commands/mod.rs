//! Command implementations for quickadd.
//!
//! Each command returns the text to print; `main` owns stdout.

mod completions;
mod config;
mod draft;
mod parse;
mod serve;

pub use completions::generate_completions;
pub use config::config;
pub use draft::draft;
pub use parse::parse;
pub use serve::serve;
