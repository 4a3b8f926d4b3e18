//! Command-line front end for the seasonal suggestion engine.

pub mod cli_args;
pub mod render;

use chrono::NaiveDate;
use cli_args::{Cli, Command, ConfigCommand, HooksArgs};
use render::{
    EventsResponse, HooksResponse, SeasonResponse, SeasonalResponse, catalog_text, events_text,
    report_text, to_json,
};
use seasonal_core::logging::{LoggingDestination, init_logging};
use seasonal_core::{
    FileConfig, OutputFormat, SuggestionEngine, apply_runtime_overrides, config_path,
    load_config, save_config, today,
};
use serde::Serialize;
use tracing::{debug, warn};

/// Load configuration, install logging, and run the requested command.
pub fn run(cli: Cli) -> Result<(), String> {
    let load = load_config();
    let mut warnings = load.warnings;
    let mut config = load.config;
    apply_runtime_overrides(
        &mut config,
        &cli.options.to_runtime_overrides(),
        &mut warnings,
    );

    let destination = if config.log_to_file {
        LoggingDestination::FileAndStderr
    } else {
        LoggingDestination::StderrOnly
    };
    if let Err(err) = init_logging(destination) {
        eprintln!("Warning: logging unavailable: {err}");
    }
    debug!(source = ?load.source, path = %config_path().display(), "Configuration loaded");
    for warning in &warnings {
        warn!("{warning}");
    }

    let command = cli.command.unwrap_or(Command::Suggest);
    let output = match command {
        Command::Config(cmd) => handle_config_command(cmd, &config)?,
        command => {
            let engine = SuggestionEngine::builtin()
                .map_err(|err| format!("invalid event catalog: {err}"))?
                .with_horizon(config.horizon_days);
            let reference = cli.options.date.unwrap_or_else(today);
            execute(&engine, &command, reference, &config)?
        }
    };

    println!("{output}");
    Ok(())
}

/// Produce the rendered output for an engine-backed command.
pub fn execute(
    engine: &SuggestionEngine,
    command: &Command,
    reference: NaiveDate,
    config: &FileConfig,
) -> Result<String, String> {
    let text = config.output == OutputFormat::Text;

    match command {
        Command::Suggest => {
            let report = engine.suggest_for(reference);
            if text {
                Ok(report_text(&report))
            } else {
                json(
                    &SeasonalResponse {
                        success: true,
                        report: &report,
                    },
                    config.pretty,
                )
            }
        }
        Command::Season => {
            let current_season = engine.current_season(reference);
            if text {
                Ok(current_season.to_string())
            } else {
                json(
                    &SeasonResponse {
                        date: reference,
                        current_season,
                    },
                    config.pretty,
                )
            }
        }
        Command::Events => {
            let events = engine.resolve(reference);
            if text {
                Ok(events_text(reference, engine.horizon_days(), &events))
            } else {
                json(
                    &EventsResponse {
                        date: reference,
                        horizon_days: engine.horizon_days(),
                        events: &events,
                    },
                    config.pretty,
                )
            }
        }
        Command::Hooks(HooksArgs { check: Some(label) }) => {
            let hook = engine
                .catalog()
                .find_hook(label)
                .ok_or_else(|| format!("Unknown hook '{}'.", label.trim()))?;
            if text {
                Ok(hook.to_string())
            } else {
                json(&HooksResponse { hooks: vec![hook] }, config.pretty)
            }
        }
        Command::Hooks(HooksArgs { check: None }) => {
            let hooks = engine.catalog().hooks();
            if text {
                Ok(hooks.join("\n"))
            } else {
                json(&HooksResponse { hooks }, config.pretty)
            }
        }
        Command::Catalog => {
            if text {
                Ok(catalog_text(engine.catalog()))
            } else {
                json(engine.catalog(), config.pretty)
            }
        }
        Command::Config(_) => Err("configuration commands do not use the engine".into()),
    }
}

fn handle_config_command(command: ConfigCommand, config: &FileConfig) -> Result<String, String> {
    match command {
        ConfigCommand::Path => Ok(config_path().display().to_string()),
        ConfigCommand::Show => toml::to_string_pretty(config).map_err(|err| err.to_string()),
        ConfigCommand::Init => {
            save_config(config).map_err(|err| err.to_string())?;
            Ok(format!("Configuration written to {}", config_path().display()))
        }
    }
}

fn json<T: Serialize>(value: &T, pretty: bool) -> Result<String, String> {
    to_json(value, pretty).map_err(|err| err.to_string())
}
