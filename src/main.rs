use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use quickadd::cli::args::{Cli, Commands, ConfigArgs};
use quickadd::cli::commands;
use quickadd::config::Config;
use quickadd::error::QuickAddError;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("{}: {e:#}", "error".red().bold());
        let code = e
            .downcast_ref::<QuickAddError>()
            .map_or(1, QuickAddError::exit_code);
        std::process::exit(code);
    }
}

/// Log to stderr, filtered by `QUICKADD_LOG`.
fn init_tracing(cli: &Cli) {
    let default = if cli.verbose {
        "debug"
    } else if matches!(cli.command, Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env("QUICKADD_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.clone()).context("loading configuration")?;
    config.general.color.apply();
    let format = cli.output.unwrap_or(config.general.default_output);

    let output = match cli.command {
        Commands::Parse(args) => commands::parse(args, &config, format)?,
        Commands::Draft(args) => commands::draft(args, &config, format)?,
        Commands::Serve(args) => commands::serve(args, &config)?,
        Commands::Config(ConfigArgs { command }) => commands::config(command, &config, cli.config, format)?,
        Commands::Completions { shell } => commands::generate_completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }

    Ok(())
}
