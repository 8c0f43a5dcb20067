//! Campaign performance insights — metric roll-ups across the entity
//! hierarchy, synthesized daily trend series, and predicate filtering.

pub mod query;
pub mod rollup;
pub mod timeseries;

pub use query::{apply_filter, apply_filter_at, QueryFilter, Queryable};
pub use rollup::{aggregate, aggregate_with_derived, MetricSummary};
pub use timeseries::{synthesize, synthesize_with, DailyPoint};
