//! Aggregate recruitment statistics.

pub mod dashboard;

pub use dashboard::DashboardStatistics;
