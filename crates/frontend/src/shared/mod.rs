pub mod api_utils;
pub mod components;
pub mod confirm;
pub mod context;
pub mod date_utils;
pub mod export;
pub mod form;
pub mod http;
pub mod icons;
pub mod list_page;
pub mod modal;
pub mod notifications;
