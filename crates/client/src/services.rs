//! UI side effects the core needs but does not implement.

use async_trait::async_trait;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::http::client::ApiClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Transient, non-blocking messages (toasts)
pub trait Notifier {
    fn notify(&self, notification: Notification);

    fn success(&self, message: String) {
        self.notify(Notification {
            level: NotificationLevel::Success,
            message,
        });
    }

    fn error(&self, message: String) {
        self.notify(Notification {
            level: NotificationLevel::Error,
            message,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

/// Asks the user to confirm an irreversible action.
/// Resolves `true` only on an explicit confirm.
#[async_trait(?Send)]
pub trait Confirmer {
    async fn confirm(&self, request: ConfirmRequest) -> bool;
}

/// Full page navigation, discarding in-memory application state
pub trait Navigator {
    fn hard_redirect(&self, path: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub struct DownloadedFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Hands a binary response to the user as a named file
pub trait Downloader {
    fn download(&self, file: DownloadedFile) -> Result<(), String>;
}

/// Everything a list page needs besides its own state
#[derive(Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub notifier: Rc<dyn Notifier>,
    pub confirmer: Rc<dyn Confirmer>,
    pub downloader: Rc<dyn Downloader>,
}

impl AppServices {
    pub fn config(&self) -> &AppConfig {
        self.api.config()
    }
}
