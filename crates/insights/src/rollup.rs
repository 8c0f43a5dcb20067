//! Metric roll-ups — sums raw counters across child entities and recomputes
//! ratios at the parent level.

use adlens_core::types::{DerivedMetrics, MetricSet};
use serde::{Deserialize, Serialize};

/// A parent-level metric total with its recomputed ratios. Serializes flat,
/// as one record carrying both raw and derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricSummary {
    #[serde(flatten)]
    pub totals: MetricSet,
    #[serde(flatten)]
    pub derived: DerivedMetrics,
}

/// Sum each raw field across all children. An empty input yields the
/// all-zero set. Commutative and associative up to float rounding; inputs
/// are not validated.
pub fn aggregate<'a, I>(children: I) -> MetricSet
where
    I: IntoIterator<Item = &'a MetricSet>,
{
    children.into_iter().fold(MetricSet::ZERO, |acc, m| MetricSet {
        impressions: acc.impressions + m.impressions,
        clicks: acc.clicks + m.clicks,
        conversions: acc.conversions + m.conversions,
        spend: acc.spend + m.spend,
    })
}

/// [`aggregate`] plus derived ratios over the summed totals. Ratios are
/// recomputed from the totals, never averaged across children.
pub fn aggregate_with_derived<'a, I>(children: I) -> MetricSummary
where
    I: IntoIterator<Item = &'a MetricSet>,
{
    let totals = aggregate(children);
    MetricSummary {
        totals,
        derived: totals.derived(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn m(impressions: u64, clicks: u64, conversions: u64, spend: f64) -> MetricSet {
        MetricSet {
            impressions,
            clicks,
            conversions,
            spend,
        }
    }

    // 1. Identities ---------------------------------------------------------

    #[test]
    fn test_aggregate_empty_is_zero() {
        let children: Vec<MetricSet> = Vec::new();
        assert_eq!(aggregate(&children), MetricSet::ZERO);
    }

    #[test]
    fn test_aggregate_singleton_is_identity() {
        let single = m(1234, 56, 7, 89.5);
        assert_eq!(aggregate([single].iter()), single);
    }

    #[test]
    fn test_aggregate_commutative() {
        let a = m(1000, 50, 5, 25.0);
        let b = m(2000, 150, 10, 75.0);
        assert_eq!(aggregate([a, b].iter()), aggregate([b, a].iter()));
    }

    // 2. Summation and derived ratios ---------------------------------------

    #[test]
    fn test_aggregate_two_campaigns() {
        let children = [m(1000, 50, 5, 25.0), m(2000, 150, 10, 75.0)];
        let summary = aggregate_with_derived(children.iter());

        assert_eq!(summary.totals.impressions, 3000);
        assert_eq!(summary.totals.clicks, 200);
        assert_eq!(summary.totals.conversions, 15);
        assert!((summary.totals.spend - 100.0).abs() < f64::EPSILON);

        // 200/3000*100 = 6.67%, 100/200 = 0.50, 100/15 = 6.67
        assert!((summary.derived.ctr - 200.0 / 3000.0 * 100.0).abs() < 1e-9);
        assert!((summary.derived.cpc - 0.5).abs() < 1e-9);
        assert!((summary.derived.cpa - 100.0 / 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_with_derived_empty() {
        let children: Vec<MetricSet> = Vec::new();
        let summary = aggregate_with_derived(&children);
        assert_eq!(summary.totals, MetricSet::ZERO);
        assert_eq!(summary.derived.ctr, 0.0);
        assert_eq!(summary.derived.cpc, 0.0);
        assert_eq!(summary.derived.cpa, 0.0);
    }

    // 3. Permissiveness ------------------------------------------------------

    #[test]
    fn test_aggregate_accepts_inconsistent_children() {
        // clicks > impressions is not rejected; totals reflect the inputs.
        let odd = [m(10, 50, 0, -5.0), m(0, 0, 3, 0.0)];
        let total = aggregate(odd.iter());
        assert_eq!(total.clicks, 50);
        assert_eq!(total.conversions, 3);
        assert!((total.spend - (-5.0)).abs() < f64::EPSILON);
    }
}
