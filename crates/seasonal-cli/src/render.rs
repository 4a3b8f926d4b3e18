use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;
use seasonal_core::{Catalog, ResolvedEvent, SeasonalReport};

/// Response envelope matching the HTTP API's seasonal suggestions body.
#[derive(Debug, Serialize)]
pub struct SeasonalResponse<'a> {
    pub success: bool,
    #[serde(flatten)]
    pub report: &'a SeasonalReport,
}

#[derive(Debug, Serialize)]
pub struct SeasonResponse<'a> {
    pub date: NaiveDate,
    pub current_season: &'a str,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse<'a> {
    pub date: NaiveDate,
    pub horizon_days: u32,
    pub events: &'a [ResolvedEvent],
}

#[derive(Debug, Serialize)]
pub struct HooksResponse<'a> {
    pub hooks: Vec<&'a str>,
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

pub fn report_text(report: &SeasonalReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Season: {}", report.current_season);

    out.push_str("\nActive events:\n");
    push_events(&mut out, &report.active_events);

    out.push_str("\nUpcoming events:\n");
    push_events(&mut out, &report.upcoming_events);

    out.push_str("\nSuggestions:\n");
    for suggestion in &report.suggestions {
        let _ = writeln!(
            out,
            "  {priority:<8} {hook} - {reason}",
            priority = format!("[{}]", suggestion.priority),
            hook = suggestion.hook,
            reason = suggestion.reason
        );
    }
    out.trim_end().to_string()
}

pub fn events_text(date: NaiveDate, horizon_days: u32, events: &[ResolvedEvent]) -> String {
    let mut out = format!("Events from {date} (horizon {horizon_days} days):\n");
    push_events(&mut out, events);
    out.trim_end().to_string()
}

pub fn catalog_text(catalog: &Catalog) -> String {
    let mut out = format!("Region: {}\n\nSeasons:\n", catalog.region);
    for season in &catalog.seasons {
        let _ = writeln!(
            out,
            "  {:<8} months {:>2}-{:<2}",
            season.name, season.start_month, season.end_month
        );
    }
    out.push_str("\nEvents:\n");
    out.push_str("  Name                     Anchor  Window  Variable\n");
    for event in &catalog.events {
        let _ = writeln!(
            out,
            "  {name:<24} {month:02}-{day:02}  {window:>4}d  {variable}",
            name = event.name,
            month = event.month,
            day = event.day,
            window = event.window_days,
            variable = if event.variable { "yes" } else { "no" }
        );
    }
    out.trim_end().to_string()
}

fn push_events(out: &mut String, events: &[ResolvedEvent]) {
    if events.is_empty() {
        out.push_str("  (none)\n");
        return;
    }
    for event in events {
        let _ = writeln!(
            out,
            "  {name:<24} {date}  in {days:>3} days  (window {window} days{active})",
            name = event.name,
            date = event.date,
            days = event.days_until,
            window = event.marketing_window,
            active = if event.is_active { ", active" } else { "" }
        );
    }
}
