//! Axum REST handlers for the dashboard API.

use adlens_core::types::{Ad, AdAccount, AdSet, Campaign};
use adlens_core::AdLensError;
use adlens_insights::QueryFilter;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::auth;
use crate::models::*;
use crate::store::DashboardStore;

/// Shared dashboard state.
#[derive(Clone)]
pub struct DashboardState {
    pub store: Arc<DashboardStore>,
}

fn error_status(err: &AdLensError) -> StatusCode {
    match err {
        AdLensError::NotFound { .. } => StatusCode::NOT_FOUND,
        AdLensError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ─── Auth ──────────────────────────────────────────────────────────────────

pub async fn handle_login(
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    match auth::authenticate(&req) {
        Ok(resp) => Ok(Json(resp)),
        Err(msg) => Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "auth_failed".to_string(),
                message: msg,
            }),
        )),
    }
}

// ─── Accounts ──────────────────────────────────────────────────────────────

pub async fn list_accounts(State(state): State<DashboardState>) -> Json<Vec<AdAccount>> {
    Json(state.store.list_accounts())
}

pub async fn get_account(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<AdAccount>, StatusCode> {
    state
        .store
        .get_account(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn account_overview(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<AccountOverview>, StatusCode> {
    state
        .store
        .account_overview(&id)
        .map(Json)
        .map_err(|e| error_status(&e))
}

pub async fn account_insights(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Query(query): Query<InsightsQuery>,
) -> Result<Json<EntityInsights>, StatusCode> {
    state
        .store
        .account_insights(&id, query.days())
        .map(Json)
        .map_err(|e| error_status(&e))
}

// ─── Campaigns ─────────────────────────────────────────────────────────────

pub async fn list_campaigns(
    State(state): State<DashboardState>,
    Path(account_id): Path<String>,
    Query(filter): Query<QueryFilter>,
) -> Json<Vec<Campaign>> {
    Json(state.store.list_campaigns(&account_id, &filter))
}

pub async fn create_campaign(
    State(state): State<DashboardState>,
    Path(account_id): Path<String>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<Campaign>), StatusCode> {
    let campaign = state
        .store
        .create_campaign(&account_id, req, "admin")
        .map_err(|e| error_status(&e))?;
    metrics::counter!("dashboard.campaigns.created").increment(1);
    Ok((StatusCode::CREATED, Json(campaign)))
}

pub async fn get_campaign(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .get_campaign(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn update_campaign(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCampaignRequest>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .update_campaign(&id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_campaign(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.store.delete_campaign(&id, "admin") {
        metrics::counter!("dashboard.campaigns.deleted").increment(1);
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn pause_campaign(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .pause_campaign(&id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn resume_campaign(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<Campaign>, StatusCode> {
    state
        .store
        .resume_campaign(&id, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// Body is JSON `null` for a campaign that has not started delivering.
pub async fn campaign_insights(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Query(query): Query<InsightsQuery>,
) -> Result<Json<Option<EntityInsights>>, StatusCode> {
    state
        .store
        .campaign_insights(&id, query.days())
        .map(Json)
        .map_err(|e| error_status(&e))
}

// ─── Ad sets ───────────────────────────────────────────────────────────────

pub async fn list_ad_sets(
    State(state): State<DashboardState>,
    Path(campaign_id): Path<String>,
    Query(filter): Query<QueryFilter>,
) -> Json<Vec<AdSet>> {
    Json(state.store.list_ad_sets(&campaign_id, &filter))
}

pub async fn create_ad_set(
    State(state): State<DashboardState>,
    Path(campaign_id): Path<String>,
    Json(req): Json<CreateAdSetRequest>,
) -> Result<(StatusCode, Json<AdSet>), StatusCode> {
    let ad_set = state
        .store
        .create_ad_set(&campaign_id, req, "admin")
        .map_err(|e| error_status(&e))?;
    metrics::counter!("dashboard.ad_sets.created").increment(1);
    Ok((StatusCode::CREATED, Json(ad_set)))
}

pub async fn get_ad_set(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<AdSet>, StatusCode> {
    state
        .store
        .get_ad_set(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn update_ad_set(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAdSetRequest>,
) -> Result<Json<AdSet>, StatusCode> {
    state
        .store
        .update_ad_set(&id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_ad_set(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> StatusCode {
    if state.store.delete_ad_set(&id, "admin") {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

pub async fn ad_set_insights(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Query(query): Query<InsightsQuery>,
) -> Result<Json<EntityInsights>, StatusCode> {
    state
        .store
        .ad_set_insights(&id, query.days())
        .map(Json)
        .map_err(|e| error_status(&e))
}

// ─── Ads ───────────────────────────────────────────────────────────────────

pub async fn list_ads(
    State(state): State<DashboardState>,
    Path(ad_set_id): Path<String>,
    Query(filter): Query<QueryFilter>,
) -> Json<Vec<Ad>> {
    Json(state.store.list_ads(&ad_set_id, &filter))
}

pub async fn create_ad(
    State(state): State<DashboardState>,
    Path(ad_set_id): Path<String>,
    Json(req): Json<CreateAdRequest>,
) -> Result<(StatusCode, Json<Ad>), StatusCode> {
    let ad = state
        .store
        .create_ad(&ad_set_id, req, "admin")
        .map_err(|e| error_status(&e))?;
    metrics::counter!("dashboard.ads.created").increment(1);
    Ok((StatusCode::CREATED, Json(ad)))
}

pub async fn get_ad(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
) -> Result<Json<Ad>, StatusCode> {
    state
        .store
        .get_ad(&id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn update_ad(
    State(state): State<DashboardState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAdRequest>,
) -> Result<Json<Ad>, StatusCode> {
    state
        .store
        .update_ad(&id, req, "admin")
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn delete_ad(State(state): State<DashboardState>, Path(id): Path<String>) -> StatusCode {
    if state.store.delete_ad(&id, "admin") {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

// ─── Audit log ─────────────────────────────────────────────────────────────

pub async fn audit_log(State(state): State<DashboardState>) -> Json<Vec<AuditLogEntry>> {
    Json(state.store.get_audit_log())
}
