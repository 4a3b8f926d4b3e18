//! Month-band season classification.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Returned when no band claims a month. Validated catalogs never hit this.
pub const FALLBACK_SEASON: &str = "Winter";

/// An inclusive month range, e.g. Winter = 12..=2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonBand {
    pub name: String,
    pub start_month: u32,
    pub end_month: u32,
}

impl SeasonBand {
    pub fn contains(&self, month: u32) -> bool {
        if wraps_year(self.start_month, self.end_month) {
            month >= self.start_month || month <= self.end_month
        } else {
            self.start_month <= month && month <= self.end_month
        }
    }
}

/// True when a month range crosses the December/January boundary.
pub fn wraps_year(start_month: u32, end_month: u32) -> bool {
    start_month > end_month
}

/// Name of the band containing `date`'s month.
pub fn classify(seasons: &[SeasonBand], date: NaiveDate) -> &str {
    classify_month(seasons, date.month())
}

pub fn classify_month(seasons: &[SeasonBand], month: u32) -> &str {
    seasons
        .iter()
        .find(|season| season.contains(month))
        .map(|season| season.name.as_str())
        .unwrap_or(FALLBACK_SEASON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn band(name: &str, start_month: u32, end_month: u32) -> SeasonBand {
        SeasonBand {
            name: name.to_string(),
            start_month,
            end_month,
        }
    }

    #[test]
    fn wraps_year_only_for_descending_ranges() {
        assert!(wraps_year(12, 2));
        assert!(wraps_year(11, 1));
        assert!(!wraps_year(3, 5));
        assert!(!wraps_year(6, 6));
    }

    #[test]
    fn non_wrapping_band_is_inclusive() {
        let spring = band("Spring", 3, 5);
        assert!(!spring.contains(2));
        assert!(spring.contains(3));
        assert!(spring.contains(5));
        assert!(!spring.contains(6));
    }

    #[test]
    fn wrapping_band_spans_year_end() {
        let winter = band("Winter", 12, 2);
        assert!(winter.contains(12));
        assert!(winter.contains(1));
        assert!(winter.contains(2));
        assert!(!winter.contains(3));
        assert!(!winter.contains(11));
    }

    #[test]
    fn uk_months_map_to_expected_seasons() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let expected = [
            "Winter", "Winter", "Spring", "Spring", "Spring", "Summer", "Summer", "Summer",
            "Autumn", "Autumn", "Autumn", "Winter",
        ];
        for (index, name) in expected.iter().enumerate() {
            let month = index as u32 + 1;
            assert_eq!(
                classify_month(&catalog.seasons, month),
                *name,
                "month {month}"
            );
        }
    }

    #[test]
    fn new_year_is_winter() {
        let catalog = Catalog::builtin().expect("embedded catalog");
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(classify(&catalog.seasons, date), "Winter");
    }

    #[test]
    fn unmatched_month_falls_back_to_winter() {
        let partial = vec![band("Summer", 6, 8)];
        assert_eq!(classify_month(&partial, 1), FALLBACK_SEASON);
        assert_eq!(classify_month(&[], 7), FALLBACK_SEASON);
    }
}
