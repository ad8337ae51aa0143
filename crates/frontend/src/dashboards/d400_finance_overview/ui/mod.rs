pub mod dashboard;

pub use dashboard::FinanceOverviewDashboard;
