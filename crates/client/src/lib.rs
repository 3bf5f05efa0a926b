//! Platform-independent core of the fleet admin frontend.
//!
//! Everything that talks to the backend or holds page state lives here,
//! behind small traits (`HttpTransport`, `Notifier`, `Confirmer`,
//! `Navigator`, `Downloader`, `TokenStorage`) that the browser crate
//! implements. This keeps the controller logic testable off-wasm.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod drafts;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod services;
pub mod session;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AppConfig;
pub use error::{ApiError, TransportError};
pub use http::client::ApiClient;
pub use services::AppServices;
pub use session::SessionStore;
