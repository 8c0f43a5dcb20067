//! Dashboard API router — mounts all endpoints under /api/v1/dashboard.

use crate::handlers::{self, DashboardState};
use crate::store::DashboardStore;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

/// Build the dashboard router over an already-constructed store.
/// Returns a Router that should be merged into the main app.
pub fn dashboard_router(store: Arc<DashboardStore>) -> Router {
    let state = DashboardState { store };

    Router::new()
        // Auth
        .route("/api/v1/dashboard/auth/login", post(handlers::handle_login))
        // Accounts
        .route("/api/v1/dashboard/accounts", get(handlers::list_accounts))
        .route("/api/v1/dashboard/accounts/:id", get(handlers::get_account))
        .route(
            "/api/v1/dashboard/accounts/:id/overview",
            get(handlers::account_overview),
        )
        .route(
            "/api/v1/dashboard/accounts/:id/insights",
            get(handlers::account_insights),
        )
        .route(
            "/api/v1/dashboard/accounts/:id/campaigns",
            get(handlers::list_campaigns).post(handlers::create_campaign),
        )
        // Campaigns
        .route(
            "/api/v1/dashboard/campaigns/:id",
            get(handlers::get_campaign)
                .put(handlers::update_campaign)
                .delete(handlers::delete_campaign),
        )
        .route(
            "/api/v1/dashboard/campaigns/:id/pause",
            post(handlers::pause_campaign),
        )
        .route(
            "/api/v1/dashboard/campaigns/:id/resume",
            post(handlers::resume_campaign),
        )
        .route(
            "/api/v1/dashboard/campaigns/:id/insights",
            get(handlers::campaign_insights),
        )
        .route(
            "/api/v1/dashboard/campaigns/:id/ad-sets",
            get(handlers::list_ad_sets).post(handlers::create_ad_set),
        )
        // Ad sets
        .route(
            "/api/v1/dashboard/ad-sets/:id",
            get(handlers::get_ad_set)
                .put(handlers::update_ad_set)
                .delete(handlers::delete_ad_set),
        )
        .route(
            "/api/v1/dashboard/ad-sets/:id/insights",
            get(handlers::ad_set_insights),
        )
        .route(
            "/api/v1/dashboard/ad-sets/:id/ads",
            get(handlers::list_ads).post(handlers::create_ad),
        )
        // Ads
        .route(
            "/api/v1/dashboard/ads/:id",
            get(handlers::get_ad)
                .put(handlers::update_ad)
                .delete(handlers::delete_ad),
        )
        // Audit log
        .route("/api/v1/dashboard/audit-log", get(handlers::audit_log))
        .with_state(state)
}
