pub mod d001_monthly_overview;

pub use d001_monthly_overview::ui::MonthlyOverviewDashboard;
