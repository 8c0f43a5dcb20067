//! Dashboard API request/response types and the audit log.

use adlens_core::types::{
    AdCreative, BidStrategy, BillingEvent, EntityStatus, Objective, Platform, TargetingSpec,
};
use adlens_insights::{DailyPoint, MetricSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Campaign requests ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateCampaignRequest {
    pub name: String,
    pub objective: Objective,
    /// New campaigns default to paused, matching the ad platform.
    #[serde(default)]
    pub status: Option<EntityStatus>,
    pub daily_budget: f64,
    #[serde(default)]
    pub lifetime_budget: Option<f64>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCampaignRequest {
    pub name: Option<String>,
    pub status: Option<EntityStatus>,
    pub daily_budget: Option<f64>,
    pub lifetime_budget: Option<f64>,
    pub end_time: Option<DateTime<Utc>>,
}

// ─── Ad set requests ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateAdSetRequest {
    pub name: String,
    pub daily_budget: f64,
    #[serde(default = "default_bid_strategy")]
    pub bid_strategy: BidStrategy,
    #[serde(default = "default_billing_event")]
    pub billing_event: BillingEvent,
    pub optimization_goal: Objective,
    #[serde(default)]
    pub targeting: TargetingSpec,
}

fn default_bid_strategy() -> BidStrategy {
    BidStrategy::LowestCost
}
fn default_billing_event() -> BillingEvent {
    BillingEvent::Impressions
}

#[derive(Debug, Deserialize)]
pub struct UpdateAdSetRequest {
    pub name: Option<String>,
    pub status: Option<EntityStatus>,
    pub daily_budget: Option<f64>,
    pub optimization_goal: Option<Objective>,
    pub targeting: Option<TargetingSpec>,
}

// ─── Ad requests ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateAdRequest {
    pub name: String,
    pub platform: Platform,
    pub creative: AdCreative,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAdRequest {
    pub name: Option<String>,
    pub status: Option<EntityStatus>,
    pub creative: Option<AdCreative>,
}

// ─── Insights ──────────────────────────────────────────────────────────────

/// `?date_range=7d|30d|90d`, defaulting to 30 days.
#[derive(Debug, Default, Deserialize)]
pub struct InsightsQuery {
    #[serde(default)]
    pub date_range: Option<String>,
}

impl InsightsQuery {
    pub fn days(&self) -> u32 {
        match self.date_range.as_deref() {
            None => 30,
            Some("7d") => 7,
            Some("30d") => 30,
            Some(_) => 90,
        }
    }
}

/// Aggregated summary plus the synthesized daily series for one entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntityInsights {
    #[serde(flatten)]
    pub summary: MetricSummary,
    pub daily: Vec<DailyPoint>,
}

/// Roll-up of one account's campaigns for the dashboard landing page.
#[derive(Debug, Clone, Serialize)]
pub struct AccountOverview {
    pub account_id: String,
    pub total_campaigns: u64,
    pub active_campaigns: u64,
    pub budget_percent_used: f64,
    #[serde(flatten)]
    pub summary: MetricSummary,
}

// ─── Auth ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

// ─── Audit log ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub user: String,
    pub action: AuditAction,
    pub resource_type: String,
    pub resource_id: String,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Pause,
    Resume,
    Login,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insights_query_ranges() {
        let q = |s: &str| InsightsQuery {
            date_range: Some(s.to_string()),
        };
        assert_eq!(InsightsQuery::default().days(), 30);
        assert_eq!(q("7d").days(), 7);
        assert_eq!(q("30d").days(), 30);
        assert_eq!(q("90d").days(), 90);
        // Unrecognized ranges fall through to the widest window.
        assert_eq!(q("365d").days(), 90);
    }
}
