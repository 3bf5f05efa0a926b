pub mod d001_monthly_overview;
