//! Predicate filtering over entity collections.
//!
//! A [`QueryFilter`] is a conjunction: free-text search, categorical
//! equality on status and platform, and a recency window. An absent
//! predicate is a wildcard. Applying a filter is an order-preserving
//! subsequence selection; the input is never mutated.

use adlens_core::types::{Ad, AdSet, Campaign, EntityStatus, Platform};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Entities expose the fields the filter predicates read.
pub trait Queryable {
    /// String fields covered by free-text search.
    fn search_fields(&self) -> Vec<&str>;
    fn status(&self) -> EntityStatus;
    fn platform(&self) -> Option<Platform> {
        None
    }
    fn started_at(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryFilter {
    /// Case-insensitive substring matched against any search field.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<EntityStatus>,
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Only entities started within the last N days.
    #[serde(default)]
    pub max_age_days: Option<i64>,
}

impl QueryFilter {
    /// The all-wildcard filter: every entity passes.
    pub fn any() -> Self {
        Self::default()
    }

    /// Evaluate the conjunction against one entity at an explicit `now`.
    pub fn matches_at<T: Queryable>(&self, entity: &T, now: DateTime<Utc>) -> bool {
        let matches_search = match self.search.as_deref() {
            None | Some("") => true,
            Some(term) => {
                let needle = term.to_lowercase();
                entity
                    .search_fields()
                    .iter()
                    .any(|f| f.to_lowercase().contains(&needle))
            }
        };

        let matches_status = self.status.map_or(true, |s| entity.status() == s);
        let matches_platform = self.platform.map_or(true, |p| entity.platform() == Some(p));
        let matches_recency = self.max_age_days.map_or(true, |threshold| {
            (now - entity.started_at()).num_days() <= threshold
        });

        matches_search && matches_status && matches_platform && matches_recency
    }

    pub fn matches<T: Queryable>(&self, entity: &T) -> bool {
        self.matches_at(entity, Utc::now())
    }
}

/// Select the matching subsequence of `items`, preserving order.
pub fn apply_filter<T: Queryable + Clone>(items: &[T], filter: &QueryFilter) -> Vec<T> {
    apply_filter_at(items, filter, Utc::now())
}

/// [`apply_filter`] at an explicit `now`, for deterministic recency tests.
pub fn apply_filter_at<T: Queryable + Clone>(
    items: &[T],
    filter: &QueryFilter,
    now: DateTime<Utc>,
) -> Vec<T> {
    items
        .iter()
        .filter(|e| filter.matches_at(*e, now))
        .cloned()
        .collect()
}

// ─── Queryable impls ───────────────────────────────────────────────────────

impl Queryable for Campaign {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
    fn status(&self) -> EntityStatus {
        self.status
    }
    fn started_at(&self) -> DateTime<Utc> {
        self.start_time
    }
}

impl Queryable for AdSet {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
    fn status(&self) -> EntityStatus {
        self.status
    }
    fn started_at(&self) -> DateTime<Utc> {
        // Ad sets carry no schedule of their own; recency is meaningless
        // without one, so they are always "current".
        Utc::now()
    }
}

impl Queryable for Ad {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.creative.headline, &self.creative.body]
    }
    fn status(&self) -> EntityStatus {
        self.status
    }
    fn platform(&self) -> Option<Platform> {
        Some(self.platform)
    }
    fn started_at(&self) -> DateTime<Utc> {
        self.start_time
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
