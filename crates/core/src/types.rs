//! Dashboard domain types — metric sets, budgets, and the ad entity
//! hierarchy (account > campaign > ad set > ad).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Metrics ───────────────────────────────────────────────────────────────

/// Raw countable performance counters for one entity.
///
/// Values are accepted as-is; consistency between fields (clicks vs
/// impressions, non-negative spend) is the producer's problem.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct MetricSet {
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub spend: f64,
}

/// Ratios computed from a [`MetricSet`]. Never stored authoritatively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct DerivedMetrics {
    /// Click-through rate, `clicks / impressions * 100`.
    pub ctr: f64,
    /// Cost per click, `spend / clicks`.
    pub cpc: f64,
    /// Cost per acquisition, `spend / conversions`.
    pub cpa: f64,
}

impl MetricSet {
    pub const ZERO: MetricSet = MetricSet {
        impressions: 0,
        clicks: 0,
        conversions: 0,
        spend: 0.0,
    };

    /// Compute derived ratios. Every ratio falls back to 0.0 when its
    /// denominator is zero — never NaN or infinity.
    pub fn derived(&self) -> DerivedMetrics {
        DerivedMetrics {
            ctr: if self.impressions > 0 {
                self.clicks as f64 / self.impressions as f64 * 100.0
            } else {
                0.0
            },
            cpc: if self.clicks > 0 {
                self.spend / self.clicks as f64
            } else {
                0.0
            },
            cpa: if self.conversions > 0 {
                self.spend / self.conversions as f64
            } else {
                0.0
            },
        }
    }
}

// ─── Budget ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    Daily,
    Lifetime,
}

/// Budget envelope for an account or campaign. `spent <= amount` is a soft
/// expectation: overspend is reported, not rejected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetInfo {
    pub amount: f64,
    pub spent: f64,
    pub budget_type: BudgetType,
}

impl BudgetInfo {
    /// Spend as a percentage of the budget. May exceed 100.
    pub fn percent_used(&self) -> f64 {
        if self.amount > 0.0 {
            self.spent / self.amount * 100.0
        } else {
            0.0
        }
    }
}

// ─── Enums ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    Active,
    Paused,
    Scheduled,
    PendingReview,
    Archived,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    Conversions,
    Traffic,
    BrandAwareness,
    Reach,
    LinkClicks,
    Engagement,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Facebook,
    Instagram,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BidStrategy {
    LowestCost,
    LowestCostWithCap,
    CostCap,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingEvent {
    Impressions,
    LinkClicks,
}

// ─── Targeting ─────────────────────────────────────────────────────────────

/// Audience targeting attached to an ad set. Pure data, no behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetingSpec {
    #[serde(default)]
    pub countries: Vec<String>,
    pub age_min: u8,
    pub age_max: u8,
    #[serde(default)]
    pub genders: Vec<Gender>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl Default for TargetingSpec {
    fn default() -> Self {
        Self {
            countries: Vec::new(),
            age_min: 18,
            age_max: 65,
            genders: vec![Gender::Male, Gender::Female],
            interests: Vec::new(),
        }
    }
}

// ─── Entity hierarchy ──────────────────────────────────────────────────────

/// Generate an opaque prefixed entity id, e.g. `camp_8f1c...`.
pub fn new_entity_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4().simple())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdAccount {
    pub id: String,
    pub name: String,
    pub status: EntityStatus,
    pub currency: String,
    pub timezone: String,
    pub business_name: String,
    pub budget: BudgetInfo,
    pub metrics: MetricSet,
    /// Ids of campaigns this account exclusively owns.
    #[serde(default)]
    pub campaign_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub status: EntityStatus,
    pub objective: Objective,
    pub daily_budget: f64,
    pub lifetime_budget: Option<f64>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_time: DateTime<Utc>,
    /// `None` until the campaign has started delivering.
    pub metrics: Option<MetricSet>,
    #[serde(default)]
    pub ad_set_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdSet {
    pub id: String,
    pub campaign_id: String,
    pub name: String,
    pub status: EntityStatus,
    pub daily_budget: f64,
    pub bid_strategy: BidStrategy,
    pub billing_event: BillingEvent,
    pub optimization_goal: Objective,
    pub targeting: TargetingSpec,
    pub metrics: MetricSet,
    #[serde(default)]
    pub ad_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdCreative {
    pub headline: String,
    pub body: String,
    pub image_url: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub ad_set_id: String,
    pub name: String,
    pub status: EntityStatus,
    pub platform: Platform,
    pub creative: AdCreative,
    pub start_time: DateTime<Utc>,
    pub metrics: MetricSet,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetricSet {
        MetricSet {
            impressions: 1000,
            clicks: 50,
            conversions: 5,
            spend: 25.0,
        }
    }

    #[test]
    fn test_derived_ratios() {
        let d = sample().derived();
        assert!((d.ctr - 5.0).abs() < f64::EPSILON);
        assert!((d.cpc - 0.5).abs() < f64::EPSILON);
        assert!((d.cpa - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_derived_zero_denominators() {
        // ctr is zero iff impressions are zero, and likewise for the others.
        let d = MetricSet::ZERO.derived();
        assert_eq!(d.ctr, 0.0);
        assert_eq!(d.cpc, 0.0);
        assert_eq!(d.cpa, 0.0);

        let no_clicks = MetricSet {
            impressions: 500,
            clicks: 0,
            conversions: 0,
            spend: 10.0,
        };
        let d = no_clicks.derived();
        assert_eq!(d.ctr, 0.0);
        assert_eq!(d.cpc, 0.0);
        assert_eq!(d.cpa, 0.0);
        assert!(d.ctr.is_finite() && d.cpc.is_finite() && d.cpa.is_finite());
    }

    #[test]
    fn test_budget_percent_may_exceed_100() {
        let b = BudgetInfo {
            amount: 100.0,
            spent: 130.0,
            budget_type: BudgetType::Lifetime,
        };
        assert!((b.percent_used() - 130.0).abs() < f64::EPSILON);

        let zero = BudgetInfo {
            amount: 0.0,
            spent: 50.0,
            budget_type: BudgetType::Daily,
        };
        assert_eq!(zero.percent_used(), 0.0);
    }

    #[test]
    fn test_entity_id_prefix() {
        let id = new_entity_id("camp");
        assert!(id.starts_with("camp_"));
        assert!(id.len() > "camp_".len());
    }
}
