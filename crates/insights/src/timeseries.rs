//! Daily series synthesis for trend charts.
//!
//! Expands an aggregate total into a pseudo-daily breakdown. The per-day
//! values are a presentational approximation drawn around the daily
//! average; they are NOT constrained to sum back to the total.

use adlens_core::types::MetricSet;
use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One charted day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub metrics: MetricSet,
}

/// Expand `total` into one point per day ending today, oldest first.
/// Each field is drawn independently per day from
/// `uniform(0.5 * total/days, 1.5 * total/days)`. `days == 0` yields an
/// empty vec. Every call produces a fresh sequence.
pub fn synthesize(total: &MetricSet, days: u32) -> Vec<DailyPoint> {
    synthesize_with(total, days, &mut rand::thread_rng())
}

/// [`synthesize`] with an injected random source, for deterministic tests.
pub fn synthesize_with<R: Rng + ?Sized>(
    total: &MetricSet,
    days: u32,
    rng: &mut R,
) -> Vec<DailyPoint> {
    if days == 0 {
        return Vec::new();
    }

    let today = Utc::now().date_naive();
    let daily = |field: f64| field / days as f64;
    let imp_avg = daily(total.impressions as f64);
    let clk_avg = daily(total.clicks as f64);
    let cnv_avg = daily(total.conversions as f64);
    let spend_avg = daily(total.spend);

    (0..days)
        .map(|i| {
            let date = today - Duration::days((days - 1 - i) as i64);
            DailyPoint {
                date,
                metrics: MetricSet {
                    impressions: draw(rng, imp_avg) as u64,
                    clicks: draw(rng, clk_avg) as u64,
                    conversions: draw(rng, cnv_avg) as u64,
                    spend: round_cents(draw(rng, spend_avg)),
                },
            }
        })
        .collect()
}

/// Uniform draw in `[0.5 * avg, 1.5 * avg)`. Degenerates to 0 for a zero
/// average rather than sampling an empty range.
fn draw<R: Rng + ?Sized>(rng: &mut R, avg: f64) -> f64 {
    avg * 0.5 + rng.gen::<f64>() * avg
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn total() -> MetricSet {
        MetricSet {
            impressions: 3000,
            clicks: 300,
            conversions: 30,
            spend: 150.0,
        }
    }

    #[test]
    fn test_point_count_matches_days() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(synthesize_with(&total(), 30, &mut rng).len(), 30);
        assert_eq!(synthesize_with(&total(), 7, &mut rng).len(), 7);
    }

    #[test]
    fn test_zero_days_is_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(synthesize_with(&total(), 0, &mut rng).is_empty());
    }

    #[test]
    fn test_values_within_half_to_threehalves_of_average() {
        // 3000 impressions over 30 days: average 100, so every day in [50, 150].
        let mut rng = StdRng::seed_from_u64(42);
        let series = synthesize_with(&total(), 30, &mut rng);
        for point in &series {
            assert!((50..=150).contains(&point.metrics.impressions));
            assert!((5..=15).contains(&point.metrics.clicks));
            assert!(point.metrics.spend >= 2.5 && point.metrics.spend <= 7.5);
        }
    }

    #[test]
    fn test_dates_ascend_and_end_today() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = synthesize_with(&total(), 7, &mut rng);
        let today = Utc::now().date_naive();
        assert_eq!(series.last().unwrap().date, today);
        assert_eq!(series.first().unwrap().date, today - Duration::days(6));
        for pair in series.windows(2) {
            assert_eq!(pair[1].date, pair[0].date + Duration::days(1));
        }
    }

    #[test]
    fn test_zero_total_stays_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = synthesize_with(&MetricSet::ZERO, 14, &mut rng);
        assert_eq!(series.len(), 14);
        for point in &series {
            assert_eq!(point.metrics, MetricSet::ZERO);
        }
    }

    #[test]
    fn test_seeded_runs_reproduce() {
        let a = synthesize_with(&total(), 30, &mut StdRng::seed_from_u64(9));
        let b = synthesize_with(&total(), 30, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
