//! `quickadd config` implementation.

use std::path::PathBuf;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::QuickAddError;
use crate::output::to_json;

/// Execute a config subcommand.
///
/// `explicit` is the `--config` override, if any.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved, or `init` would
/// overwrite an existing file without `--force`.
pub fn config(
    command: ConfigCommands,
    config: &Config,
    explicit: Option<PathBuf>,
    format: OutputFormat,
) -> Result<String, QuickAddError> {
    match command {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => config.to_yaml(),
        },
        ConfigCommands::Path => Ok(Paths::config_file_or(explicit)?.display().to_string()),
        ConfigCommands::Init { force } => {
            let path = Paths::config_file_or(explicit)?;
            if path.exists() && !force {
                return Err(QuickAddError::InvalidArgument(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                Paths::with_root(parent.to_path_buf()).ensure_dirs()?;
            }
            Config::default().save_to_path(&path)?;
            Ok(format!("Wrote default configuration to {}", path.display()))
        },
    }
}
