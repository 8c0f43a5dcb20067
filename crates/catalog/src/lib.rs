//! Entity catalog — the data-source boundary and its mock implementation.
//!
//! Real deployments implement [`AdDataSource`] against the ad platform's
//! HTTP API; development and tests use [`MockCatalog`].

pub mod fixtures;
pub mod mock;
pub mod source;

pub use fixtures::{demo_catalog, DemoCatalog};
pub use mock::MockCatalog;
pub use source::AdDataSource;
