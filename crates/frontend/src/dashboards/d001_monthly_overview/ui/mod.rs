mod dashboard;

pub use dashboard::MonthlyOverviewDashboard;
