use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{Catalog, CatalogError};
use crate::season::classify;
use crate::suggest::{Suggestion, compose_partition, partition_events};
use crate::window::{DEFAULT_HORIZON_DAYS, ResolvedEvent, resolve_events};

/// Everything a caller needs to theme content for one reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalReport {
    pub current_season: String,
    pub active_events: Vec<ResolvedEvent>,
    pub upcoming_events: Vec<ResolvedEvent>,
    pub suggestions: Vec<Suggestion>,
}

/// Entry point over a validated, immutable catalog.
///
/// Construction is the only fallible step; every query afterwards is a pure
/// function of the reference date. The engine holds no interior mutability and
/// can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    catalog: Catalog,
    horizon_days: u32,
}

impl SuggestionEngine {
    /// Build an engine over the embedded UK catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Catalog::builtin()?;
        debug!(
            region = %catalog.region,
            events = catalog.events.len(),
            seasons = catalog.seasons.len(),
            "Loaded event catalog"
        );
        Ok(Self::from_validated(catalog))
    }

    #[cfg(test)]
    pub(crate) fn from_catalog(catalog: Catalog) -> Result<Self, CatalogError> {
        catalog.validate()?;
        Ok(Self::from_validated(catalog))
    }

    fn from_validated(catalog: Catalog) -> Self {
        Self {
            catalog,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }

    pub fn with_horizon(mut self, horizon_days: u32) -> Self {
        self.horizon_days = horizon_days;
        self
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_season(&self, date: NaiveDate) -> &str {
        classify(&self.catalog.seasons, date)
    }

    /// All events that are active or fall inside the horizon, nearest first.
    pub fn resolve(&self, date: NaiveDate) -> Vec<ResolvedEvent> {
        resolve_events(&self.catalog.events, date, self.horizon_days)
    }

    /// Report for `reference`, or for today's local date when `None`.
    pub fn suggest(&self, reference: Option<NaiveDate>) -> SeasonalReport {
        self.suggest_for(reference.unwrap_or_else(today))
    }

    pub fn suggest_for(&self, date: NaiveDate) -> SeasonalReport {
        let current_season = self.current_season(date).to_string();
        let partition = partition_events(self.resolve(date));
        let suggestions = compose_partition(&current_season, &partition);

        debug!(
            %date,
            season = %current_season,
            active = partition.active.len(),
            upcoming = partition.upcoming.len(),
            suggestions = suggestions.len(),
            "Composed seasonal suggestions"
        );

        SeasonalReport {
            current_season,
            active_events: partition.active,
            upcoming_events: partition.upcoming,
            suggestions,
        }
    }
}

/// Current calendar date in the system's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
