pub mod export;
pub mod finance;
pub mod list_filter;
pub mod period;
