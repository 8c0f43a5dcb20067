//! Demo entity catalog used to seed the management store and back the
//! mock data source.

use adlens_core::types::{
    Ad, AdAccount, AdCreative, AdSet, BidStrategy, BillingEvent, BudgetInfo, BudgetType, Campaign,
    EntityStatus, Gender, MetricSet, Objective, Platform, TargetingSpec,
};
use chrono::{Duration, Utc};

/// The full fixture set, hierarchy links included.
#[derive(Debug, Clone)]
pub struct DemoCatalog {
    pub accounts: Vec<AdAccount>,
    pub campaigns: Vec<Campaign>,
    pub ad_sets: Vec<AdSet>,
    pub ads: Vec<Ad>,
}

fn metrics(impressions: u64, clicks: u64, conversions: u64, spend: f64) -> MetricSet {
    MetricSet {
        impressions,
        clicks,
        conversions,
        spend,
    }
}

/// Build the demo catalog. Dates are relative to now so recency filters
/// behave the same on any day the fixtures are loaded.
pub fn demo_catalog() -> DemoCatalog {
    let now = Utc::now();

    let accounts = vec![
        AdAccount {
            id: "act_main".into(),
            name: "Main Ad Account".into(),
            status: EntityStatus::Active,
            currency: "USD".into(),
            timezone: "America/Los_Angeles".into(),
            business_name: "Acme Outfitters".into(),
            budget: BudgetInfo {
                amount: 10_000.0,
                spent: 3_450.75,
                budget_type: BudgetType::Lifetime,
            },
            metrics: metrics(125_000, 3_500, 210, 3_450.75),
            campaign_ids: vec![
                "camp_summer_sale".into(),
                "camp_product_launch".into(),
                "camp_brand_q2".into(),
                "camp_retargeting".into(),
            ],
        },
        AdAccount {
            id: "act_secondary".into(),
            name: "Secondary Ad Account".into(),
            status: EntityStatus::Active,
            currency: "USD".into(),
            timezone: "America/New_York".into(),
            business_name: "Acme Outfitters".into(),
            budget: BudgetInfo {
                amount: 5_000.0,
                spent: 1_250.50,
                budget_type: BudgetType::Lifetime,
            },
            metrics: metrics(75_000, 1_800, 95, 1_250.50),
            campaign_ids: vec!["camp_holiday".into()],
        },
    ];

    // (id, account, name, status, objective, daily, lifetime, started_days_ago, metrics)
    let campaign_rows = vec![
        (
            "camp_summer_sale",
            "act_main",
            "Summer Sale 2026",
            EntityStatus::Active,
            Objective::Conversions,
            100.0,
            Some(3_000.0),
            25,
            Some(metrics(75_000, 2_100, 120, 1_450.75)),
        ),
        (
            "camp_product_launch",
            "act_main",
            "New Product Launch",
            EntityStatus::Active,
            Objective::Traffic,
            75.0,
            Some(2_250.0),
            12,
            Some(metrics(45_000, 1_800, 85, 950.25)),
        ),
        (
            "camp_brand_q2",
            "act_main",
            "Brand Awareness Q2",
            EntityStatus::Active,
            Objective::BrandAwareness,
            50.0,
            Some(1_500.0),
            70,
            Some(metrics(120_000, 3_200, 65, 1_050.50)),
        ),
        (
            "camp_retargeting",
            "act_main",
            "Retargeting Campaign",
            EntityStatus::Paused,
            Objective::Conversions,
            35.0,
            Some(1_050.0),
            40,
            Some(metrics(28_000, 1_400, 95, 750.25)),
        ),
        (
            "camp_holiday",
            "act_secondary",
            "Holiday Special",
            EntityStatus::Scheduled,
            Objective::Conversions,
            120.0,
            Some(3_600.0),
            -60,
            None,
        ),
    ];

    let campaigns = campaign_rows
        .into_iter()
        .map(
            |(id, account, name, status, objective, daily, lifetime, ago, m)| Campaign {
                id: id.into(),
                account_id: account.into(),
                name: name.into(),
                status,
                objective,
                daily_budget: daily,
                lifetime_budget: lifetime,
                start_time: now - Duration::days(ago),
                end_time: Some(now - Duration::days(ago) + Duration::days(45)),
                created_time: now - Duration::days(ago.max(0) + 5),
                metrics: m,
                ad_set_ids: match id {
                    "camp_summer_sale" => {
                        vec!["adset_summer_main".into(), "adset_summer_retarget".into()]
                    }
                    "camp_product_launch" => vec!["adset_launch_main".into()],
                    "camp_brand_q2" => vec!["adset_brand_broad".into()],
                    _ => Vec::new(),
                },
            },
        )
        .collect();

    let ad_sets = vec![
        AdSet {
            id: "adset_summer_main".into(),
            campaign_id: "camp_summer_sale".into(),
            name: "Summer Sale - Main Audience".into(),
            status: EntityStatus::Active,
            daily_budget: 50.0,
            bid_strategy: BidStrategy::LowestCost,
            billing_event: BillingEvent::Impressions,
            optimization_goal: Objective::Conversions,
            targeting: TargetingSpec {
                countries: vec!["US".into()],
                age_min: 25,
                age_max: 45,
                genders: vec![Gender::Male, Gender::Female],
                interests: vec!["Fashion".into(), "Shopping".into()],
            },
            metrics: metrics(35_000, 1_200, 65, 750.25),
            ad_ids: vec!["ad_summer_hero".into(), "ad_summer_carousel".into()],
        },
        AdSet {
            id: "adset_summer_retarget".into(),
            campaign_id: "camp_summer_sale".into(),
            name: "Summer Sale - Retargeting".into(),
            status: EntityStatus::Active,
            daily_budget: 30.0,
            bid_strategy: BidStrategy::LowestCost,
            billing_event: BillingEvent::Impressions,
            optimization_goal: Objective::Conversions,
            targeting: TargetingSpec {
                countries: vec!["US".into()],
                ..TargetingSpec::default()
            },
            metrics: metrics(18_000, 950, 85, 450.50),
            ad_ids: vec!["ad_cart_reminder".into()],
        },
        AdSet {
            id: "adset_launch_main".into(),
            campaign_id: "camp_product_launch".into(),
            name: "New Product - Main Audience".into(),
            status: EntityStatus::Active,
            daily_budget: 40.0,
            bid_strategy: BidStrategy::LowestCost,
            billing_event: BillingEvent::LinkClicks,
            optimization_goal: Objective::LinkClicks,
            targeting: TargetingSpec {
                countries: vec!["US".into(), "CA".into()],
                age_min: 25,
                age_max: 55,
                genders: vec![Gender::Male, Gender::Female],
                interests: vec!["Technology".into(), "Innovation".into()],
            },
            metrics: metrics(25_000, 1_100, 45, 550.25),
            ad_ids: vec!["ad_launch_video".into()],
        },
        AdSet {
            id: "adset_brand_broad".into(),
            campaign_id: "camp_brand_q2".into(),
            name: "Brand Awareness - Broad Audience".into(),
            status: EntityStatus::Active,
            daily_budget: 50.0,
            bid_strategy: BidStrategy::LowestCost,
            billing_event: BillingEvent::Impressions,
            optimization_goal: Objective::Reach,
            targeting: TargetingSpec {
                countries: vec!["US".into(), "CA".into(), "UK".into(), "AU".into()],
                ..TargetingSpec::default()
            },
            metrics: metrics(120_000, 3_200, 65, 1_050.50),
            ad_ids: vec!["ad_brand_story".into(), "ad_brand_reel".into()],
        },
    ];

    // (id, ad_set, name, platform, headline, body, started_days_ago, metrics)
    let ad_rows = vec![
        (
            "ad_summer_hero",
            "adset_summer_main",
            "Summer Hero Image",
            Platform::Facebook,
            "Summer Styles Are Here",
            "Up to 40% off the new summer collection. Free shipping over $100.",
            25,
            metrics(20_000, 700, 40, 420.00),
        ),
        (
            "ad_summer_carousel",
            "adset_summer_main",
            "Summer Carousel",
            Platform::Instagram,
            "Swipe the Season's Best",
            "Five looks, one tap. Shop the edit before it sells out.",
            20,
            metrics(15_000, 500, 25, 330.25),
        ),
        (
            "ad_cart_reminder",
            "adset_summer_retarget",
            "Cart Reminder",
            Platform::Facebook,
            "Still Thinking It Over?",
            "Your cart is waiting. Complete your order and get 10% off.",
            18,
            metrics(18_000, 950, 85, 450.50),
        ),
        (
            "ad_launch_video",
            "adset_launch_main",
            "Launch Teaser Video",
            Platform::Instagram,
            "Meet the Next Generation",
            "Smarter, lighter, faster. See what we built this year.",
            12,
            metrics(25_000, 1_100, 45, 550.25),
        ),
        (
            "ad_brand_story",
            "adset_brand_broad",
            "Brand Story",
            Platform::Facebook,
            "Made to Last Since 1998",
            "Quality you can feel. Learn what goes into every stitch.",
            70,
            metrics(70_000, 1_900, 40, 610.50),
        ),
        (
            "ad_brand_reel",
            "adset_brand_broad",
            "Brand Reel",
            Platform::Instagram,
            "Behind the Seams",
            "30 seconds inside our workshop. Watch the full story.",
            65,
            metrics(50_000, 1_300, 25, 440.00),
        ),
    ];

    let ads = ad_rows
        .into_iter()
        .map(
            |(id, ad_set, name, platform, headline, body, ago, m)| Ad {
                id: id.into(),
                ad_set_id: ad_set.into(),
                name: name.into(),
                status: EntityStatus::Active,
                platform,
                creative: AdCreative {
                    headline: headline.into(),
                    body: body.into(),
                    image_url: format!("https://cdn.adlens.io/creatives/{}.jpg", id),
                    call_to_action: "Shop Now".into(),
                },
                start_time: now - Duration::days(ago),
                metrics: m,
            },
        )
        .collect();

    DemoCatalog {
        accounts,
        campaigns,
        ad_sets,
        ads,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_links_resolve() {
        let catalog = demo_catalog();

        for account in &catalog.accounts {
            for cid in &account.campaign_ids {
                assert!(
                    catalog.campaigns.iter().any(|c| &c.id == cid),
                    "account {} references missing campaign {}",
                    account.id,
                    cid
                );
            }
        }
        for campaign in &catalog.campaigns {
            assert!(catalog.accounts.iter().any(|a| a.id == campaign.account_id));
            for sid in &campaign.ad_set_ids {
                assert!(catalog.ad_sets.iter().any(|s| &s.id == sid));
            }
        }
        for ad in &catalog.ads {
            assert!(catalog.ad_sets.iter().any(|s| s.id == ad.ad_set_id));
        }
    }

    #[test]
    fn test_scheduled_campaign_has_no_metrics() {
        let catalog = demo_catalog();
        let holiday = catalog
            .campaigns
            .iter()
            .find(|c| c.id == "camp_holiday")
            .unwrap();
        assert_eq!(holiday.status, EntityStatus::Scheduled);
        assert!(holiday.metrics.is_none());
    }
}
