use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::core::{parse_clock, parse_instant};
use crate::features::nlp::TaskKind;

#[derive(Parser)]
#[command(name = "quickadd")]
#[command(about = "Turn natural-language quick-add text into structured tasks")]
#[command(long_about = "quickadd - natural-language quick-add parser

Extracts dates, times, tags, lists, priority, kind and focus markers from
free text like \"meet Alex tomorrow 14:00-15:00 @Work #sales !!!\".

QUICK START:
  quickadd parse \"Call mom tomorrow 14:00\"        Show the parsed fields
  quickadd draft \"Plan party 31.12\" --tag home   Build a task payload
  quickadd serve --port 8787                      Run POST /api/tasks/parse

OUTPUT FORMATS:
  --output pretty    Human-readable colored output
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  quickadd <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file (default: ~/.quickadd/config.yaml)
    #[arg(long, global = true, env = "QUICKADD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log parser decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse quick-add text and show the extracted fields
    ///
    /// # Supported Patterns
    ///
    ///   Focus:      *  or the word "focus"
    ///   Priority:   !, !!, !!! (p0-p3 when enabled in config)
    ///   Kind:       meet/meeting/встреча, study/lesson/lecture/урок/курс/лекция
    ///   Tags:       #tag1 #tag2
    ///   List:       @Work (first one only)
    ///   Dates:      today, tomorrow, сегодня, завтра, fri, 31.12, 1/7/26, 2025-12-31
    ///   Times:      14:00, 14:00-15:00
    ///
    /// # Examples
    ///
    ///   quickadd parse "Team sync 14:00-15:00 @Work #sales !!!"
    ///   quickadd parse "gym fri 7:00" --now 2025-06-10T09:00:00+03:00
    #[command(alias = "p")]
    Parse(ParseArgs),

    /// Build a task payload from quick-add text plus explicit overrides
    ///
    /// Flags win over parsed values; --tag values are merged with parsed tags.
    ///
    /// # Examples
    ///
    ///   quickadd draft "Call mom 14:00" --on 2025-06-20
    ///   quickadd draft "report !!" --priority 3 --list Work --tag q2
    #[command(alias = "d")]
    Draft(DraftArgs),

    /// Serve POST /api/tasks/parse over HTTP
    Serve(ServeArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   quickadd completions zsh > ~/.zsh/completions/_quickadd
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args)]
pub struct ParseArgs {
    /// The task description in natural language
    pub text: String,

    /// Reference instant for relative dates (RFC 3339, default: now)
    #[arg(long, value_parser = parse_now_arg)]
    pub now: Option<DateTime<FixedOffset>>,
}

#[derive(Args)]
pub struct DraftArgs {
    #[command(flatten)]
    pub input: ParseArgs,

    /// Day to schedule on when only a time is known (YYYY-MM-DD)
    #[arg(long)]
    pub on: Option<NaiveDate>,

    /// Override the parsed title
    #[arg(long)]
    pub title: Option<String>,

    /// Override the parsed date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Override the parsed start time (HH:MM)
    #[arg(long, value_parser = parse_time_arg)]
    pub time: Option<NaiveTime>,

    /// Override the parsed priority (0-3)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=3))]
    pub priority: Option<u8>,

    /// Override the detected kind
    #[arg(long, value_enum)]
    pub kind: Option<TaskKind>,

    /// Override the parsed list
    #[arg(long)]
    pub list: Option<String>,

    /// Extra tags (repeatable)
    #[arg(long = "tag", short = 't')]
    pub tags: Vec<String>,

    /// Mark the task as a focus task
    #[arg(long)]
    pub focus: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Interface to bind (default: server.host from config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (default: server.port from config)
    #[arg(long, short = 'p')]
    pub port: Option<u16>,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn parse_now_arg(value: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_instant(value)
        .ok_or_else(|| format!("'{value}' is not an RFC 3339 instant (e.g. 2025-06-10T09:30:00+00:00)"))
}

fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    parse_clock(value).ok_or_else(|| format!("'{value}' is not a valid HH:MM time"))
}
