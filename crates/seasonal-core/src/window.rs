//! Next-occurrence and lead-window resolution for catalog events.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::trace;

use crate::catalog::EventDefinition;

/// Lookahead used when the caller does not pick a horizon.
pub const DEFAULT_HORIZON_DAYS: u32 = 60;
/// Day substituted when an anchor does not exist in the target month.
pub const CLAMPED_DAY: u32 = 28;

/// An event pinned to a concrete date relative to some reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEvent {
    pub name: String,
    pub date: NaiveDate,
    pub days_until: i64,
    pub is_active: bool,
    pub marketing_window: u32,
    #[serde(skip)]
    pub lead_window_start: NaiveDate,
}

impl ResolvedEvent {
    /// Inclusive promotional span `[lead_window_start, date]`.
    pub fn lead_window(&self) -> (NaiveDate, NaiveDate) {
        (self.lead_window_start, self.date)
    }
}

/// Inclusive interval containment.
pub fn is_within(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Build `year-month-day`, clamping the day to 28 when the date does not exist
/// (Feb 29 outside leap years, Apr 31, ...).
///
/// Returns `None` only when `year` itself is outside chrono's representable range.
pub fn anchor_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year, month, CLAMPED_DAY))
}

/// Nearest occurrence of the anchor on or after `reference`.
pub fn next_occurrence(event: &EventDefinition, reference: NaiveDate) -> Option<NaiveDate> {
    let this_year = anchor_date(reference.year(), event.month, event.day)?;
    if this_year >= reference {
        return Some(this_year);
    }
    anchor_date(reference.year().checked_add(1)?, event.month, event.day)
}

/// Resolve one event, returning `None` when it is neither active nor inside the horizon.
pub fn resolve_event(
    event: &EventDefinition,
    reference: NaiveDate,
    horizon_days: u32,
) -> Option<ResolvedEvent> {
    let date = next_occurrence(event, reference)?;
    let lead_window_start = date
        .checked_sub_days(Days::new(u64::from(event.window_days)))
        .unwrap_or(NaiveDate::MIN);
    let horizon_end = reference
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);

    let is_active = is_within(reference, lead_window_start, date);
    if !is_active && !is_within(date, reference, horizon_end) {
        trace!(event = %event.name, %date, "outside lead window and horizon");
        return None;
    }

    Some(ResolvedEvent {
        name: event.name.clone(),
        date,
        days_until: (date - reference).num_days(),
        is_active,
        marketing_window: event.window_days,
        lead_window_start,
    })
}

/// Resolve every relevant event, ordered by `days_until` (ties keep catalog order).
pub fn resolve_events(
    events: &[EventDefinition],
    reference: NaiveDate,
    horizon_days: u32,
) -> Vec<ResolvedEvent> {
    let mut resolved: Vec<ResolvedEvent> = events
        .iter()
        .filter_map(|event| resolve_event(event, reference, horizon_days))
        .collect();
    resolved.sort_by_key(|event| event.days_until);
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(name: &str, month: u32, day: u32, window_days: u32) -> EventDefinition {
        EventDefinition {
            name: name.to_string(),
            month,
            day,
            window_days,
            variable: false,
        }
    }

    #[test]
    fn anchor_date_clamps_missing_days() {
        assert_eq!(anchor_date(2023, 2, 29), Some(date(2023, 2, 28)));
        assert_eq!(anchor_date(2024, 2, 29), Some(date(2024, 2, 29)));
        assert_eq!(anchor_date(2025, 4, 31), Some(date(2025, 4, 28)));
        assert_eq!(anchor_date(2025, 12, 31), Some(date(2025, 12, 31)));
    }

    #[test]
    fn occurrence_on_reference_day_is_kept() {
        let halloween = event("Halloween", 10, 31, 21);
        assert_eq!(
            next_occurrence(&halloween, date(2025, 10, 31)),
            Some(date(2025, 10, 31))
        );
    }

    #[test]
    fn past_occurrence_rolls_to_next_year() {
        let new_year = event("New Year", 1, 1, 7);
        assert_eq!(
            next_occurrence(&new_year, date(2025, 12, 28)),
            Some(date(2026, 1, 1))
        );
    }

    #[test]
    fn rollover_into_non_leap_year_clamps() {
        let leap = event("Leap Sale", 2, 29, 3);
        assert_eq!(
            next_occurrence(&leap, date(2024, 3, 1)),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn lead_window_boundaries_are_inclusive() {
        let black_friday = event("Black Friday", 11, 29, 7);

        let at_start = resolve_event(&black_friday, date(2025, 11, 22), 0).expect("active");
        assert!(at_start.is_active);
        assert_eq!(at_start.lead_window(), (date(2025, 11, 22), date(2025, 11, 29)));

        let on_the_day = resolve_event(&black_friday, date(2025, 11, 29), 0).expect("active");
        assert!(on_the_day.is_active);
        assert_eq!(on_the_day.days_until, 0);

        assert!(resolve_event(&black_friday, date(2025, 11, 21), 0).is_none());
        let day_before = resolve_event(&black_friday, date(2025, 11, 21), 60).expect("upcoming");
        assert!(!day_before.is_active);
        assert_eq!(day_before.days_until, 8);
    }

    #[test]
    fn zero_day_window_is_only_active_on_the_day() {
        let flash = event("Flash Sale", 6, 1, 0);
        assert!(resolve_event(&flash, date(2025, 6, 1), 0)
            .expect("same day")
            .is_active);
        assert!(resolve_event(&flash, date(2025, 5, 31), 0).is_none());
    }

    #[test]
    fn horizon_end_is_inclusive() {
        let christmas = event("Christmas", 12, 25, 0);
        let reference = date(2025, 10, 26);
        assert!(resolve_event(&christmas, reference, 60).is_some());
        assert!(resolve_event(&christmas, reference, 59).is_none());
    }

    #[test]
    fn window_spanning_year_end_is_active_in_january() {
        let twelfth_night = event("Twelfth Night", 1, 5, 10);
        let resolved = resolve_event(&twelfth_night, date(2025, 12, 30), 0).expect("active");
        assert!(resolved.is_active);
        assert_eq!(resolved.date, date(2026, 1, 5));
        assert_eq!(resolved.days_until, 6);
    }

    #[test]
    fn results_are_sorted_with_stable_ties() {
        let events = vec![
            event("Later", 3, 20, 0),
            event("Same Day A", 3, 10, 0),
            event("Same Day B", 3, 10, 0),
            event("Soon", 3, 2, 0),
        ];
        let resolved = resolve_events(&events, date(2025, 3, 1), 60);
        let names: Vec<&str> = resolved.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Soon", "Same Day A", "Same Day B", "Later"]);
    }

    #[test]
    fn serialized_shape_omits_lead_window_start() {
        let resolved = resolve_event(&event("Easter", 4, 1, 14), date(2025, 3, 20), 60)
            .expect("active");
        let json = serde_json::to_value(&resolved).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Easter",
                "date": "2025-04-01",
                "days_until": 12,
                "is_active": true,
                "marketing_window": 14
            })
        );
    }
}
