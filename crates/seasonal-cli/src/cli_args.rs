use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use seasonal_core::config::{OutputFormat, RuntimeOverrides};

/// Top-level CLI entrypoint.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Seasonal marketing hooks for a reference date", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub options: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Supported subcommands. Without one, `suggest` runs.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Season, active and upcoming events, and ranked suggestions.
    Suggest,
    /// Only the season for the reference date.
    Season,
    /// Every event that is active or inside the horizon, nearest first.
    Events,
    /// Labels usable as campaign hooks.
    Hooks(HooksArgs),
    /// The embedded event and season tables.
    Catalog,
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Configuration file management.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration.
    Show,
    /// Print the location of config.toml.
    Path,
    /// Write the effective configuration (defaults plus flags) to config.toml.
    Init,
}

#[derive(Debug, Clone, Args, Default)]
pub struct HooksArgs {
    /// Resolve a hook label to its catalog spelling; fails when unknown.
    #[arg(long, value_name = "LABEL")]
    pub check: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Text => OutputFormat::Text,
        }
    }
}

/// Flags accepted before or after any subcommand.
#[derive(Debug, Clone, Args, Default)]
pub struct GlobalArgs {
    /// Reference date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true, value_name = "DATE", value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Days to look ahead for upcoming events (defaults to config value).
    #[arg(long, global = true, value_name = "DAYS")]
    pub horizon: Option<u32>,

    /// Output format (defaults to config value).
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    /// Emit single-line JSON.
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub compact: bool,

    /// Also write JSON logs to the log file in the config directory.
    #[arg(long = "log-file", global = true, action = ArgAction::SetTrue)]
    pub log_file: bool,
}

impl GlobalArgs {
    pub fn to_runtime_overrides(&self) -> RuntimeOverrides {
        RuntimeOverrides {
            horizon_days: self.horizon,
            output: self.format.map(OutputFormat::from),
            pretty: self.compact.then_some(false),
            log_to_file: self.log_file.then_some(true),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|err| format!("expected YYYY-MM-DD ({err})"))
}
