//! Dashboard aggregate service.

pub mod service;

pub use service::{DashboardService, DashboardSummary};
