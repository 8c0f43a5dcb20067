//! Dashboard UI backend — accounts, campaigns, ad sets, ads, insights.
//!
//! Provides REST API endpoints for the ads dashboard. Data lives in a
//! DashMap store seeded from the entity catalog; swap the store for real
//! persistence in production.

pub mod auth;
pub mod handlers;
pub mod models;
pub mod router;
pub mod store;

pub use handlers::DashboardState;
pub use router::dashboard_router;
pub use store::DashboardStore;
