//! In-memory dashboard store backed by DashMap.
//!
//! Holds the account > campaign > ad set > ad hierarchy for the UI.
//! Production: replace with a real persistence layer; the API surface
//! stays the same for development and testing.

use adlens_catalog::{AdDataSource, DemoCatalog};
use adlens_core::types::{
    Ad, AdAccount, AdSet, Campaign, EntityStatus, MetricSet, new_entity_id,
};
use adlens_core::{AdLensError, AdLensResult};
use adlens_insights::{aggregate_with_derived, apply_filter, synthesize, QueryFilter};
use chrono::Utc;
use dashmap::DashMap;
use tracing::info;
use uuid::Uuid;

use crate::models::*;

/// Thread-safe in-memory store for the ad entity hierarchy and audit log.
pub struct DashboardStore {
    accounts: DashMap<String, AdAccount>,
    campaigns: DashMap<String, Campaign>,
    ad_sets: DashMap<String, AdSet>,
    ads: DashMap<String, Ad>,
    audit_log: DashMap<Uuid, AuditLogEntry>,
}

impl DashboardStore {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
            campaigns: DashMap::new(),
            ad_sets: DashMap::new(),
            ads: DashMap::new(),
            audit_log: DashMap::new(),
        }
    }

    /// Seed synchronously from an already-built catalog.
    pub fn with_demo_catalog(catalog: DemoCatalog) -> Self {
        let store = Self::new();
        for account in catalog.accounts {
            store.accounts.insert(account.id.clone(), account);
        }
        for campaign in catalog.campaigns {
            store.campaigns.insert(campaign.id.clone(), campaign);
        }
        for ad_set in catalog.ad_sets {
            store.ad_sets.insert(ad_set.id.clone(), ad_set);
        }
        for ad in catalog.ads {
            store.ads.insert(ad.id.clone(), ad);
        }
        info!(
            accounts = store.accounts.len(),
            campaigns = store.campaigns.len(),
            "Dashboard store seeded"
        );
        store
    }

    /// Populate by walking a data source through the hierarchy.
    pub async fn hydrate<S>(source: &S) -> AdLensResult<Self>
    where
        S: AdDataSource + ?Sized,
    {
        let store = Self::new();
        for account in source.fetch_accounts().await? {
            let account_id = account.id.clone();
            store.accounts.insert(account_id.clone(), account);
            for campaign in source.fetch_campaigns(&account_id).await? {
                let campaign_id = campaign.id.clone();
                store.campaigns.insert(campaign_id.clone(), campaign);
                for ad_set in source.fetch_ad_sets(&campaign_id).await? {
                    let ad_set_id = ad_set.id.clone();
                    store.ad_sets.insert(ad_set_id.clone(), ad_set);
                    for ad in source.fetch_ads(&ad_set_id).await? {
                        store.ads.insert(ad.id.clone(), ad);
                    }
                }
            }
        }
        info!(
            accounts = store.accounts.len(),
            campaigns = store.campaigns.len(),
            ad_sets = store.ad_sets.len(),
            ads = store.ads.len(),
            "Dashboard store hydrated from data source"
        );
        Ok(store)
    }

    // ─── Accounts ──────────────────────────────────────────────────────────

    pub fn list_accounts(&self) -> Vec<AdAccount> {
        let mut accounts: Vec<AdAccount> =
            self.accounts.iter().map(|r| r.value().clone()).collect();
        accounts.sort_by(|a, b| a.name.cmp(&b.name));
        accounts
    }

    pub fn get_account(&self, id: &str) -> Option<AdAccount> {
        self.accounts.get(id).map(|r| r.value().clone())
    }

    /// Roll one account's campaigns up into the landing-page overview.
    pub fn account_overview(&self, account_id: &str) -> AdLensResult<AccountOverview> {
        let account = self
            .get_account(account_id)
            .ok_or_else(|| AdLensError::not_found("ad account", account_id))?;

        let campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|r| r.value().account_id == account_id)
            .map(|r| r.value().clone())
            .collect();

        let child_metrics: Vec<MetricSet> =
            campaigns.iter().filter_map(|c| c.metrics).collect();
        let summary = aggregate_with_derived(child_metrics.iter());

        Ok(AccountOverview {
            account_id: account.id,
            total_campaigns: campaigns.len() as u64,
            active_campaigns: campaigns
                .iter()
                .filter(|c| c.status == EntityStatus::Active)
                .count() as u64,
            budget_percent_used: account.budget.percent_used(),
            summary,
        })
    }

    pub fn account_insights(&self, account_id: &str, days: u32) -> AdLensResult<EntityInsights> {
        let account = self
            .get_account(account_id)
            .ok_or_else(|| AdLensError::not_found("ad account", account_id))?;
        Ok(Self::build_insights(&account.metrics, days))
    }

    // ─── Campaigns ─────────────────────────────────────────────────────────

    pub fn list_campaigns(&self, account_id: &str, filter: &QueryFilter) -> Vec<Campaign> {
        let mut campaigns: Vec<Campaign> = self
            .campaigns
            .iter()
            .filter(|r| r.value().account_id == account_id)
            .map(|r| r.value().clone())
            .collect();
        campaigns.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        apply_filter(&campaigns, filter)
    }

    pub fn get_campaign(&self, id: &str) -> Option<Campaign> {
        self.campaigns.get(id).map(|r| r.value().clone())
    }

    pub fn create_campaign(
        &self,
        account_id: &str,
        req: CreateCampaignRequest,
        user: &str,
    ) -> AdLensResult<Campaign> {
        let now = Utc::now();
        let campaign = Campaign {
            id: new_entity_id("camp"),
            account_id: account_id.to_string(),
            name: req.name,
            status: req.status.unwrap_or(EntityStatus::Paused),
            objective: req.objective,
            daily_budget: req.daily_budget,
            lifetime_budget: req.lifetime_budget,
            start_time: req.start_time.unwrap_or(now),
            end_time: req.end_time,
            created_time: now,
            // No delivery yet, so no insights yet.
            metrics: None,
            ad_set_ids: Vec::new(),
        };

        let mut account = self
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| AdLensError::not_found("ad account", account_id))?;
        account.campaign_ids.push(campaign.id.clone());
        drop(account);

        let id = campaign.id.clone();
        self.campaigns.insert(id.clone(), campaign.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "campaign",
            &id,
            serde_json::json!({"name": &campaign.name}),
        );
        Ok(campaign)
    }

    pub fn update_campaign(
        &self,
        id: &str,
        req: UpdateCampaignRequest,
        user: &str,
    ) -> Option<Campaign> {
        self.campaigns.get_mut(id).map(|mut entry| {
            let c = entry.value_mut();
            if let Some(name) = req.name {
                c.name = name;
            }
            if let Some(status) = req.status {
                c.status = status;
            }
            if let Some(daily) = req.daily_budget {
                c.daily_budget = daily;
            }
            if let Some(lifetime) = req.lifetime_budget {
                c.lifetime_budget = Some(lifetime);
            }
            if let Some(end) = req.end_time {
                c.end_time = Some(end);
            }
            self.log_audit(user, AuditAction::Update, "campaign", id, serde_json::json!({}));
            c.clone()
        })
    }

    /// Delete a campaign and everything it owns: its ad sets and their ads.
    pub fn delete_campaign(&self, id: &str, user: &str) -> bool {
        let removed = match self.campaigns.remove(id) {
            Some((_, campaign)) => campaign,
            None => return false,
        };

        if let Some(mut account) = self.accounts.get_mut(&removed.account_id) {
            account.campaign_ids.retain(|cid| cid != id);
        }

        let ad_set_ids: Vec<String> = self
            .ad_sets
            .iter()
            .filter(|r| r.value().campaign_id == id)
            .map(|r| r.key().clone())
            .collect();
        for sid in ad_set_ids {
            self.remove_ad_set_cascade(&sid);
        }

        self.log_audit(user, AuditAction::Delete, "campaign", id, serde_json::json!({}));
        true
    }

    pub fn pause_campaign(&self, id: &str, user: &str) -> Option<Campaign> {
        self.set_campaign_status(id, EntityStatus::Paused, AuditAction::Pause, user)
    }

    pub fn resume_campaign(&self, id: &str, user: &str) -> Option<Campaign> {
        self.set_campaign_status(id, EntityStatus::Active, AuditAction::Resume, user)
    }

    fn set_campaign_status(
        &self,
        id: &str,
        status: EntityStatus,
        action: AuditAction,
        user: &str,
    ) -> Option<Campaign> {
        self.campaigns.get_mut(id).map(|mut entry| {
            entry.value_mut().status = status;
            self.log_audit(user, action, "campaign", id, serde_json::json!({}));
            entry.value().clone()
        })
    }

    /// Insights for one campaign over the trailing window. `Ok(None)` means
    /// the campaign exists but has not started delivering.
    pub fn campaign_insights(
        &self,
        id: &str,
        days: u32,
    ) -> AdLensResult<Option<EntityInsights>> {
        let campaign = self
            .get_campaign(id)
            .ok_or_else(|| AdLensError::not_found("campaign", id))?;
        Ok(campaign.metrics.map(|m| Self::build_insights(&m, days)))
    }

    // ─── Ad sets ───────────────────────────────────────────────────────────

    pub fn list_ad_sets(&self, campaign_id: &str, filter: &QueryFilter) -> Vec<AdSet> {
        let mut ad_sets: Vec<AdSet> = self
            .ad_sets
            .iter()
            .filter(|r| r.value().campaign_id == campaign_id)
            .map(|r| r.value().clone())
            .collect();
        ad_sets.sort_by(|a, b| a.name.cmp(&b.name));
        apply_filter(&ad_sets, filter)
    }

    pub fn get_ad_set(&self, id: &str) -> Option<AdSet> {
        self.ad_sets.get(id).map(|r| r.value().clone())
    }

    pub fn create_ad_set(
        &self,
        campaign_id: &str,
        req: CreateAdSetRequest,
        user: &str,
    ) -> AdLensResult<AdSet> {
        let ad_set = AdSet {
            id: new_entity_id("adset"),
            campaign_id: campaign_id.to_string(),
            name: req.name,
            status: EntityStatus::Paused,
            daily_budget: req.daily_budget,
            bid_strategy: req.bid_strategy,
            billing_event: req.billing_event,
            optimization_goal: req.optimization_goal,
            targeting: req.targeting,
            metrics: MetricSet::ZERO,
            ad_ids: Vec::new(),
        };

        let mut campaign = self
            .campaigns
            .get_mut(campaign_id)
            .ok_or_else(|| AdLensError::not_found("campaign", campaign_id))?;
        campaign.ad_set_ids.push(ad_set.id.clone());
        drop(campaign);

        let id = ad_set.id.clone();
        self.ad_sets.insert(id.clone(), ad_set.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "ad_set",
            &id,
            serde_json::json!({"name": &ad_set.name}),
        );
        Ok(ad_set)
    }

    pub fn update_ad_set(&self, id: &str, req: UpdateAdSetRequest, user: &str) -> Option<AdSet> {
        self.ad_sets.get_mut(id).map(|mut entry| {
            let s = entry.value_mut();
            if let Some(name) = req.name {
                s.name = name;
            }
            if let Some(status) = req.status {
                s.status = status;
            }
            if let Some(daily) = req.daily_budget {
                s.daily_budget = daily;
            }
            if let Some(goal) = req.optimization_goal {
                s.optimization_goal = goal;
            }
            if let Some(targeting) = req.targeting {
                s.targeting = targeting;
            }
            self.log_audit(user, AuditAction::Update, "ad_set", id, serde_json::json!({}));
            s.clone()
        })
    }

    /// Delete an ad set and the ads it owns.
    pub fn delete_ad_set(&self, id: &str, user: &str) -> bool {
        let campaign_id = match self.ad_sets.get(id) {
            Some(entry) => entry.value().campaign_id.clone(),
            None => return false,
        };
        if let Some(mut campaign) = self.campaigns.get_mut(&campaign_id) {
            campaign.ad_set_ids.retain(|sid| sid != id);
        }
        self.remove_ad_set_cascade(id);
        self.log_audit(user, AuditAction::Delete, "ad_set", id, serde_json::json!({}));
        true
    }

    pub fn ad_set_insights(&self, id: &str, days: u32) -> AdLensResult<EntityInsights> {
        let ad_set = self
            .get_ad_set(id)
            .ok_or_else(|| AdLensError::not_found("ad set", id))?;
        Ok(Self::build_insights(&ad_set.metrics, days))
    }

    /// Drop an ad set and its ads without touching the owning campaign.
    fn remove_ad_set_cascade(&self, id: &str) {
        self.ad_sets.remove(id);
        let ad_ids: Vec<String> = self
            .ads
            .iter()
            .filter(|r| r.value().ad_set_id == id)
            .map(|r| r.key().clone())
            .collect();
        for aid in ad_ids {
            self.ads.remove(&aid);
        }
    }

    // ─── Ads ───────────────────────────────────────────────────────────────

    pub fn list_ads(&self, ad_set_id: &str, filter: &QueryFilter) -> Vec<Ad> {
        let mut ads: Vec<Ad> = self
            .ads
            .iter()
            .filter(|r| r.value().ad_set_id == ad_set_id)
            .map(|r| r.value().clone())
            .collect();
        ads.sort_by(|a, b| a.name.cmp(&b.name));
        apply_filter(&ads, filter)
    }

    pub fn get_ad(&self, id: &str) -> Option<Ad> {
        self.ads.get(id).map(|r| r.value().clone())
    }

    pub fn create_ad(&self, ad_set_id: &str, req: CreateAdRequest, user: &str) -> AdLensResult<Ad> {
        let ad = Ad {
            id: new_entity_id("ad"),
            ad_set_id: ad_set_id.to_string(),
            name: req.name,
            status: EntityStatus::PendingReview,
            platform: req.platform,
            creative: req.creative,
            start_time: Utc::now(),
            metrics: MetricSet::ZERO,
        };

        let mut ad_set = self
            .ad_sets
            .get_mut(ad_set_id)
            .ok_or_else(|| AdLensError::not_found("ad set", ad_set_id))?;
        ad_set.ad_ids.push(ad.id.clone());
        drop(ad_set);

        let id = ad.id.clone();
        self.ads.insert(id.clone(), ad.clone());
        self.log_audit(
            user,
            AuditAction::Create,
            "ad",
            &id,
            serde_json::json!({"name": &ad.name}),
        );
        Ok(ad)
    }

    pub fn update_ad(&self, id: &str, req: UpdateAdRequest, user: &str) -> Option<Ad> {
        self.ads.get_mut(id).map(|mut entry| {
            let a = entry.value_mut();
            if let Some(name) = req.name {
                a.name = name;
            }
            if let Some(status) = req.status {
                a.status = status;
            }
            if let Some(creative) = req.creative {
                a.creative = creative;
            }
            self.log_audit(user, AuditAction::Update, "ad", id, serde_json::json!({}));
            a.clone()
        })
    }

    pub fn delete_ad(&self, id: &str, user: &str) -> bool {
        let removed = match self.ads.remove(id) {
            Some((_, ad)) => ad,
            None => return false,
        };
        if let Some(mut ad_set) = self.ad_sets.get_mut(&removed.ad_set_id) {
            ad_set.ad_ids.retain(|aid| aid != id);
        }
        self.log_audit(user, AuditAction::Delete, "ad", id, serde_json::json!({}));
        true
    }

    // ─── Audit log ─────────────────────────────────────────────────────────

    pub fn get_audit_log(&self) -> Vec<AuditLogEntry> {
        let mut entries: Vec<AuditLogEntry> =
            self.audit_log.iter().map(|r| r.value().clone()).collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    fn log_audit(
        &self,
        user: &str,
        action: AuditAction,
        resource_type: &str,
        resource_id: &str,
        details: serde_json::Value,
    ) {
        let entry = AuditLogEntry {
            id: Uuid::new_v4(),
            user: user.to_string(),
            action,
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
            details,
            timestamp: Utc::now(),
        };
        self.audit_log.insert(entry.id, entry);
    }

    fn build_insights(metrics: &MetricSet, days: u32) -> EntityInsights {
        EntityInsights {
            summary: aggregate_with_derived(std::iter::once(metrics)),
            daily: synthesize(metrics, days),
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use adlens_catalog::demo_catalog;
    use adlens_core::types::Objective;

    fn demo_store() -> DashboardStore {
        DashboardStore::with_demo_catalog(demo_catalog())
    }

    // 1. Listing and filtering ----------------------------------------------

    #[test]
    fn test_list_campaigns_scoped_and_filtered() {
        let store = demo_store();

        let all = store.list_campaigns("act_main", &QueryFilter::any());
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|c| c.account_id == "act_main"));

        let paused = store.list_campaigns(
            "act_main",
            &QueryFilter {
                status: Some(EntityStatus::Paused),
                ..QueryFilter::any()
            },
        );
        assert_eq!(paused.len(), 1);
        assert_eq!(paused[0].id, "camp_retargeting");
    }

    // 2. Create / update ----------------------------------------------------

    #[test]
    fn test_create_campaign_links_to_account() {
        let store = demo_store();
        let campaign = store
            .create_campaign(
                "act_main",
                CreateCampaignRequest {
                    name: "Fall Preview".into(),
                    objective: Objective::Traffic,
                    status: None,
                    daily_budget: 40.0,
                    lifetime_budget: None,
                    start_time: None,
                    end_time: None,
                },
                "admin",
            )
            .unwrap();

        assert_eq!(campaign.status, EntityStatus::Paused);
        assert!(campaign.metrics.is_none());
        let account = store.get_account("act_main").unwrap();
        assert!(account.campaign_ids.contains(&campaign.id));
    }

    #[test]
    fn test_create_campaign_unknown_account() {
        let store = demo_store();
        let err = store
            .create_campaign(
                "act_nope",
                CreateCampaignRequest {
                    name: "x".into(),
                    objective: Objective::Reach,
                    status: None,
                    daily_budget: 1.0,
                    lifetime_budget: None,
                    start_time: None,
                    end_time: None,
                },
                "admin",
            )
            .unwrap_err();
        assert!(matches!(err, AdLensError::NotFound { .. }));
    }

    #[test]
    fn test_pause_and_resume() {
        let store = demo_store();
        let paused = store.pause_campaign("camp_summer_sale", "admin").unwrap();
        assert_eq!(paused.status, EntityStatus::Paused);
        let resumed = store.resume_campaign("camp_summer_sale", "admin").unwrap();
        assert_eq!(resumed.status, EntityStatus::Active);
    }

    // 3. Cascade delete ------------------------------------------------------

    #[test]
    fn test_delete_campaign_cascades() {
        let store = demo_store();
        assert!(store.delete_campaign("camp_summer_sale", "admin"));

        assert!(store.get_campaign("camp_summer_sale").is_none());
        // Owned ad sets and their ads are gone with it.
        assert!(store.get_ad_set("adset_summer_main").is_none());
        assert!(store.get_ad_set("adset_summer_retarget").is_none());
        assert!(store.get_ad("ad_summer_hero").is_none());
        assert!(store.get_ad("ad_cart_reminder").is_none());
        // The owning account no longer references it.
        let account = store.get_account("act_main").unwrap();
        assert!(!account.campaign_ids.iter().any(|id| id == "camp_summer_sale"));
        // Siblings survive.
        assert!(store.get_campaign("camp_product_launch").is_some());
    }

    #[test]
    fn test_delete_ad_set_cascades_ads_only() {
        let store = demo_store();
        assert!(store.delete_ad_set("adset_summer_main", "admin"));
        assert!(store.get_ad("ad_summer_hero").is_none());
        assert!(store.get_ad("ad_summer_carousel").is_none());
        let campaign = store.get_campaign("camp_summer_sale").unwrap();
        assert!(!campaign.ad_set_ids.iter().any(|id| id == "adset_summer_main"));
    }

    #[test]
    fn test_delete_missing_campaign_is_false() {
        let store = demo_store();
        assert!(!store.delete_campaign("camp_missing", "admin"));
    }

    // 4. Overview and insights ----------------------------------------------

    #[test]
    fn test_account_overview_totals() {
        let store = demo_store();
        let overview = store.account_overview("act_main").unwrap();

        assert_eq!(overview.total_campaigns, 4);
        assert_eq!(overview.active_campaigns, 3);
        assert_eq!(overview.summary.totals.impressions, 268_000);
        assert_eq!(overview.summary.totals.clicks, 8_500);
        assert_eq!(overview.summary.totals.conversions, 365);
        assert!((overview.summary.totals.spend - 4_201.75).abs() < 1e-9);
        assert!(overview.summary.derived.ctr > 0.0);
    }

    #[test]
    fn test_campaign_insights_window() {
        let store = demo_store();
        let insights = store
            .campaign_insights("camp_summer_sale", 7)
            .unwrap()
            .unwrap();
        assert_eq!(insights.daily.len(), 7);
        assert_eq!(insights.summary.totals.impressions, 75_000);
    }

    #[test]
    fn test_scheduled_campaign_has_null_insights() {
        let store = demo_store();
        let insights = store.campaign_insights("camp_holiday", 30).unwrap();
        assert!(insights.is_none());
    }

    #[test]
    fn test_insights_for_missing_campaign() {
        let store = demo_store();
        assert!(store.campaign_insights("camp_missing", 30).is_err());
    }

    // 5. Audit log -----------------------------------------------------------

    #[test]
    fn test_mutations_are_audited() {
        let store = demo_store();
        store.pause_campaign("camp_summer_sale", "admin");
        store.delete_campaign("camp_retargeting", "admin");

        let log = store.get_audit_log();
        assert!(log
            .iter()
            .any(|e| e.action == AuditAction::Pause && e.resource_id == "camp_summer_sale"));
        assert!(log
            .iter()
            .any(|e| e.action == AuditAction::Delete && e.resource_id == "camp_retargeting"));
    }

    // 6. Hydration -----------------------------------------------------------

    #[tokio::test]
    async fn test_hydrate_from_mock_source() {
        let source = adlens_catalog::MockCatalog::instant();
        let store = DashboardStore::hydrate(&source).await.unwrap();
        assert_eq!(store.list_accounts().len(), 2);
        assert!(store.get_campaign("camp_summer_sale").is_some());
        assert!(store.get_ad("ad_brand_reel").is_some());
    }
}
