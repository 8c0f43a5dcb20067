//! Data-source capability — the boundary behind which entity collections
//! are produced. The dashboard core only ever sees resolved, in-memory
//! records; a production source would wrap the ad platform's HTTP API.

use adlens_core::types::{Ad, AdAccount, AdSet, Campaign};
use adlens_core::AdLensResult;
use async_trait::async_trait;

#[async_trait]
pub trait AdDataSource: Send + Sync {
    /// All ad accounts visible to the current session.
    async fn fetch_accounts(&self) -> AdLensResult<Vec<AdAccount>>;

    async fn fetch_account(&self, account_id: &str) -> AdLensResult<AdAccount>;

    /// Campaigns owned by one account.
    async fn fetch_campaigns(&self, account_id: &str) -> AdLensResult<Vec<Campaign>>;

    async fn fetch_campaign(&self, campaign_id: &str) -> AdLensResult<Campaign>;

    /// Ad sets owned by one campaign.
    async fn fetch_ad_sets(&self, campaign_id: &str) -> AdLensResult<Vec<AdSet>>;

    /// Ads owned by one ad set.
    async fn fetch_ads(&self, ad_set_id: &str) -> AdLensResult<Vec<Ad>>;
}
