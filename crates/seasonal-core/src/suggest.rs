use std::fmt;

use serde::Serialize;

use crate::window::ResolvedEvent;

/// Maximum number of not-yet-active events reported to the caller.
pub const UPCOMING_EVENT_LIMIT: usize = 5;
/// Maximum number of suggestions derived from upcoming events.
pub const UPCOMING_SUGGESTION_LIMIT: usize = 3;
/// Upcoming events further out than this are low priority.
pub const NEAR_TERM_DAYS: i64 = 30;

const SEASON_REASON: &str = "Current season - use seasonal themes and imagery";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub hook: String,
    pub reason: String,
    pub priority: Priority,
}

/// Resolved events split into the two views handed to callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPartition {
    pub active: Vec<ResolvedEvent>,
    /// Inactive events in `days_until` order, capped at [`UPCOMING_EVENT_LIMIT`].
    pub upcoming: Vec<ResolvedEvent>,
}

pub fn partition_events<I>(resolved: I) -> EventPartition
where
    I: IntoIterator<Item = ResolvedEvent>,
{
    let mut partition = EventPartition::default();
    for event in resolved {
        if event.is_active {
            partition.active.push(event);
        } else if partition.upcoming.len() < UPCOMING_EVENT_LIMIT {
            partition.upcoming.push(event);
        }
    }
    partition
}

/// Build suggestions from the current season and the resolver output.
pub fn compose(season: &str, resolved: &[ResolvedEvent]) -> Vec<Suggestion> {
    let partition = partition_events(resolved.iter().cloned());
    compose_partition(season, &partition)
}

/// Active events first, then the season, then the nearest upcoming events.
pub fn compose_partition(season: &str, partition: &EventPartition) -> Vec<Suggestion> {
    let mut suggestions =
        Vec::with_capacity(partition.active.len() + 1 + UPCOMING_SUGGESTION_LIMIT);

    for event in &partition.active {
        suggestions.push(Suggestion {
            hook: event.name.clone(),
            reason: format!(
                "Currently in marketing window ({} days until event)",
                event.days_until
            ),
            priority: Priority::High,
        });
    }

    suggestions.push(Suggestion {
        hook: season.to_string(),
        reason: SEASON_REASON.to_string(),
        priority: Priority::Medium,
    });

    for event in partition.upcoming.iter().take(UPCOMING_SUGGESTION_LIMIT) {
        let priority = if event.days_until > NEAR_TERM_DAYS {
            Priority::Low
        } else {
            Priority::Medium
        };
        suggestions.push(Suggestion {
            hook: event.name.clone(),
            reason: format!("Coming up in {} days - start planning", event.days_until),
            priority,
        });
    }

    suggestions
}
