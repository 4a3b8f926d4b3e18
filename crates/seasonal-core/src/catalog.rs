use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::season::SeasonBand;

/// Schema version expected in the embedded calendar document.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;
/// Number of season bands a catalog must carry.
pub const SEASON_COUNT: usize = 4;
const MAX_ANCHOR_DAY: u32 = 31;
const EMBEDDED_CATALOG: &str = include_str!("../../../static/uk_calendar.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported catalog schema version {found}; expected {expected}")]
    SchemaVersion { expected: u32, found: u32 },
    #[error("catalog entry is missing a name")]
    EmptyName,
    #[error("duplicate catalog name '{0}'")]
    DuplicateName(String),
    #[error("event '{name}' has invalid anchor month {month}")]
    InvalidMonth { name: String, month: u32 },
    #[error("event '{name}' has invalid anchor day {day}")]
    InvalidDay { name: String, day: u32 },
    #[error("season '{name}' has invalid month range {start_month}..={end_month}")]
    InvalidSeasonRange {
        name: String,
        start_month: u32,
        end_month: u32,
    },
    #[error("expected {expected} seasons, found {found}")]
    SeasonCount { expected: usize, found: usize },
    #[error("month {month} is covered by {count} seasons; expected exactly one")]
    SeasonCoverage { month: u32, count: usize },
}

/// A recurring annual marketing event anchored to a month and day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDefinition {
    pub name: String,
    pub month: u32,
    pub day: u32,
    /// Days of promotion leading up to (and including) the anchor date.
    pub window_days: u32,
    /// Moveable date approximated by a fixed anchor (Easter, bank holidays, ...).
    #[serde(default)]
    pub variable: bool,
}

/// Regional event and season tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub schema_version: u32,
    pub region: String,
    pub seasons: Vec<SeasonBand>,
    pub events: Vec<EventDefinition>,
}

impl Catalog {
    /// Parse and validate the catalog embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub(crate) fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(raw)?;
        if catalog.schema_version != CATALOG_SCHEMA_VERSION {
            return Err(CatalogError::SchemaVersion {
                expected: CATALOG_SCHEMA_VERSION,
                found: catalog.schema_version,
            });
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants the resolver and classifier rely on.
    ///
    /// Names must be non-empty and unique (case-insensitively, across seasons and
    /// events), anchors must fall in `1..=12` / `1..=31`, and the season bands must
    /// partition the twelve months.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        let labels = self
            .seasons
            .iter()
            .map(|season| season.name.as_str())
            .chain(self.events.iter().map(|event| event.name.as_str()));
        for label in labels {
            let trimmed = label.trim();
            if trimmed.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !names.insert(trimmed.to_lowercase()) {
                return Err(CatalogError::DuplicateName(trimmed.to_string()));
            }
        }

        for event in &self.events {
            if !(1..=12).contains(&event.month) {
                return Err(CatalogError::InvalidMonth {
                    name: event.name.clone(),
                    month: event.month,
                });
            }
            if !(1..=MAX_ANCHOR_DAY).contains(&event.day) {
                return Err(CatalogError::InvalidDay {
                    name: event.name.clone(),
                    day: event.day,
                });
            }
        }

        if self.seasons.len() != SEASON_COUNT {
            return Err(CatalogError::SeasonCount {
                expected: SEASON_COUNT,
                found: self.seasons.len(),
            });
        }

        for season in &self.seasons {
            let valid = |month: u32| (1..=12).contains(&month);
            if !valid(season.start_month) || !valid(season.end_month) {
                return Err(CatalogError::InvalidSeasonRange {
                    name: season.name.clone(),
                    start_month: season.start_month,
                    end_month: season.end_month,
                });
            }
        }

        for month in 1..=12 {
            let count = self
                .seasons
                .iter()
                .filter(|season| season.contains(month))
                .count();
            if count != 1 {
                return Err(CatalogError::SeasonCoverage { month, count });
            }
        }

        Ok(())
    }

    /// Every label usable as a campaign hook: seasons first, then events, in catalog order.
    pub fn hooks(&self) -> Vec<&str> {
        self.seasons
            .iter()
            .map(|season| season.name.as_str())
            .chain(self.events.iter().map(|event| event.name.as_str()))
            .collect()
    }

    /// Resolve a user-supplied hook label to its canonical catalog spelling.
    pub fn find_hook(&self, label: &str) -> Option<&str> {
        let wanted = label.trim();
        self.hooks()
            .into_iter()
            .find(|hook| hook.eq_ignore_ascii_case(wanted))
    }

    pub fn event(&self, name: &str) -> Option<&EventDefinition> {
        self.events
            .iter()
            .find(|event| event.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
pub(crate) fn catalog_for_testing(raw: &str) -> Result<Catalog, CatalogError> {
    Catalog::from_json(raw)
}
