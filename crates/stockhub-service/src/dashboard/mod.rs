//! Dashboard statistics service.

pub mod service;

pub use service::{DashboardService, DashboardStats, ItemStatusCounts, RequestStatusCounts};
