use chrono::{Datelike, NaiveDate};
use seasonal_core::suggest::{UPCOMING_EVENT_LIMIT, UPCOMING_SUGGESTION_LIMIT};
use seasonal_core::{Priority, SuggestionEngine};

/// Every day from 2023-01-01 through 2024-12-31 (one non-leap and one leap year).
fn every_day() -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).expect("start");
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).expect("end");
    start.iter_days().take_while(move |day| *day <= end)
}

#[test]
fn every_month_belongs_to_exactly_one_season() {
    let engine = SuggestionEngine::builtin().expect("engine");
    let seasons = &engine.catalog().seasons;

    for month in 1..=12 {
        let matching: Vec<&str> = seasons
            .iter()
            .filter(|season| season.contains(month))
            .map(|season| season.name.as_str())
            .collect();
        assert_eq!(matching.len(), 1, "month {month} matched {matching:?}");
    }
}

#[test]
fn resolved_occurrences_never_precede_the_reference() {
    let engine = SuggestionEngine::builtin().expect("engine");

    for reference in every_day() {
        for event in engine.resolve(reference) {
            assert!(event.date >= reference, "{} on {reference}", event.name);
            assert_eq!(event.days_until, (event.date - reference).num_days());
            assert_eq!(
                event.is_active,
                event.lead_window_start <= reference,
                "{} on {reference}",
                event.name
            );
            if !event.is_active {
                assert!(event.days_until <= i64::from(engine.horizon_days()));
            }
        }
    }
}

#[test]
fn resolution_is_sorted_by_days_until() {
    let engine = SuggestionEngine::builtin().expect("engine");

    for reference in every_day() {
        let resolved = engine.resolve(reference);
        assert!(
            resolved
                .windows(2)
                .all(|pair| pair[0].days_until <= pair[1].days_until),
            "unsorted on {reference}"
        );
    }
}

#[test]
fn report_views_respect_their_caps() {
    let engine = SuggestionEngine::builtin().expect("engine");

    for reference in every_day() {
        let report = engine.suggest_for(reference);
        assert!(report.upcoming_events.len() <= UPCOMING_EVENT_LIMIT);
        assert!(report.active_events.iter().all(|event| event.is_active));
        assert!(report.upcoming_events.iter().all(|event| !event.is_active));

        let from_upcoming = report.upcoming_events.len().min(UPCOMING_SUGGESTION_LIMIT);
        assert_eq!(
            report.suggestions.len(),
            report.active_events.len() + 1 + from_upcoming,
            "on {reference}"
        );

        let season_index = report.active_events.len();
        let season = &report.suggestions[season_index];
        assert_eq!(season.hook, report.current_season);
        assert_eq!(season.priority, Priority::Medium);
        assert!(
            report.suggestions[..season_index]
                .iter()
                .all(|s| s.priority == Priority::High)
        );
        assert!(
            report.suggestions[season_index + 1..]
                .iter()
                .all(|s| s.priority != Priority::High)
        );
    }
}

#[test]
fn season_follows_the_reference_month() {
    let engine = SuggestionEngine::builtin().expect("engine");

    for reference in every_day() {
        let expected = match reference.month() {
            3..=5 => "Spring",
            6..=8 => "Summer",
            9..=11 => "Autumn",
            _ => "Winter",
        };
        assert_eq!(engine.current_season(reference), expected, "{reference}");
    }
}
