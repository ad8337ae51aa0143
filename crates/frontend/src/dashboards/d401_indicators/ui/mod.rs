pub mod dashboard;

pub use dashboard::IndicatorsDashboard;
