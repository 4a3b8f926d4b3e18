//! Seasonal marketing hooks for a reference date.
//!
//! Given a calendar date, the engine classifies the season, finds which
//! catalog events are inside their promotional lead window or coming up
//! within a horizon, and turns both into prioritised content suggestions.
//!
//! ```no_run
//! use seasonal_core::SuggestionEngine;
//!
//! let engine = SuggestionEngine::builtin()?;
//! let report = engine.suggest(None);
//! println!("{}: {} suggestions", report.current_season, report.suggestions.len());
//! # Ok::<(), seasonal_core::CatalogError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod logging;
pub mod season;
pub mod suggest;
pub mod window;

pub use catalog::{Catalog, CatalogError, EventDefinition};
pub use config::{
    ConfigError, ConfigLoadResult, ConfigSource, FileConfig, OutputFormat, RuntimeOverrides,
    apply_runtime_overrides, config_directory, config_path, load_config, load_config_from,
    save_config, save_config_to,
};
pub use engine::{SeasonalReport, SuggestionEngine, today};
pub use season::{SeasonBand, classify, wraps_year};
pub use suggest::{EventPartition, Priority, Suggestion, compose, partition_events};
pub use window::{DEFAULT_HORIZON_DAYS, ResolvedEvent, anchor_date, resolve_events};
