//! Mock data source — serves the demo catalog behind a configurable
//! simulated network delay. Swap for an HTTP-backed source in production.

use std::time::Duration;

use adlens_core::types::{Ad, AdAccount, AdSet, Campaign};
use adlens_core::{AdLensError, AdLensResult};
use async_trait::async_trait;
use tracing::debug;

use crate::fixtures::{demo_catalog, DemoCatalog};
use crate::source::AdDataSource;

pub struct MockCatalog {
    latency: Duration,
    data: DemoCatalog,
}

impl MockCatalog {
    /// Demo catalog with the given simulated per-request latency.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            data: demo_catalog(),
        }
    }

    /// Zero-latency source for tests.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl AdDataSource for MockCatalog {
    async fn fetch_accounts(&self) -> AdLensResult<Vec<AdAccount>> {
        self.simulate_latency().await;
        debug!(count = self.data.accounts.len(), "mock: fetched accounts");
        Ok(self.data.accounts.clone())
    }

    async fn fetch_account(&self, account_id: &str) -> AdLensResult<AdAccount> {
        self.simulate_latency().await;
        self.data
            .accounts
            .iter()
            .find(|a| a.id == account_id)
            .cloned()
            .ok_or_else(|| AdLensError::not_found("ad account", account_id))
    }

    async fn fetch_campaigns(&self, account_id: &str) -> AdLensResult<Vec<Campaign>> {
        self.simulate_latency().await;
        Ok(self
            .data
            .campaigns
            .iter()
            .filter(|c| c.account_id == account_id)
            .cloned()
            .collect())
    }

    async fn fetch_campaign(&self, campaign_id: &str) -> AdLensResult<Campaign> {
        self.simulate_latency().await;
        self.data
            .campaigns
            .iter()
            .find(|c| c.id == campaign_id)
            .cloned()
            .ok_or_else(|| AdLensError::not_found("campaign", campaign_id))
    }

    async fn fetch_ad_sets(&self, campaign_id: &str) -> AdLensResult<Vec<AdSet>> {
        self.simulate_latency().await;
        Ok(self
            .data
            .ad_sets
            .iter()
            .filter(|s| s.campaign_id == campaign_id)
            .cloned()
            .collect())
    }

    async fn fetch_ads(&self, ad_set_id: &str) -> AdLensResult<Vec<Ad>> {
        self.simulate_latency().await;
        Ok(self
            .data
            .ads
            .iter()
            .filter(|a| a.ad_set_id == ad_set_id)
            .cloned()
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_accounts() {
        let source = MockCatalog::instant();
        let accounts = source.fetch_accounts().await.unwrap();
        assert_eq!(accounts.len(), 2);
    }

    #[tokio::test]
    async fn test_campaigns_scoped_to_account() {
        let source = MockCatalog::instant();
        let campaigns = source.fetch_campaigns("act_main").await.unwrap();
        assert!(!campaigns.is_empty());
        assert!(campaigns.iter().all(|c| c.account_id == "act_main"));

        let none = source.fetch_campaigns("act_missing").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_missing_campaign_is_not_found() {
        let source = MockCatalog::instant();
        let err = source.fetch_campaign("camp_missing").await.unwrap_err();
        assert!(matches!(err, AdLensError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ads_scoped_to_ad_set() {
        let source = MockCatalog::instant();
        let ads = source.fetch_ads("adset_summer_main").await.unwrap();
        assert_eq!(ads.len(), 2);
        assert!(ads.iter().all(|a| a.ad_set_id == "adset_summer_main"));
    }
}
