//! Application-wide services, built once and provided through context.

use client::auth::AuthService;
use client::http::HttpTransport;
use client::services::{AppServices, Navigator};
use client::upload::ImageUploader;
use client::{ApiClient, SessionStore};
use leptos::prelude::*;
use std::rc::Rc;

use crate::shared::api_utils::{app_config, BrowserNavigator};
use crate::shared::confirm::ConfirmService;
use crate::shared::export::BrowserDownloader;
use crate::shared::http::GlooTransport;
use crate::shared::notifications::NotificationCenter;
use crate::system::auth::storage::SessionTokenStorage;

/// Handles to the non-`Send` service objects plus the UI-owned notifier
/// and confirmation dialog. Cheap to copy into closures.
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<AppServices, LocalStorage>,
    auth: StoredValue<AuthService, LocalStorage>,
    uploader: StoredValue<ImageUploader, LocalStorage>,
    pub notifications: NotificationCenter,
    pub confirm: ConfirmService,
}

impl AppContext {
    pub fn new() -> Self {
        let config = app_config();
        log::info!("backend at {}", config.api_base);

        let transport: Rc<dyn HttpTransport> = Rc::new(GlooTransport);
        let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
        let session = SessionStore::new(Rc::new(SessionTokenStorage));
        let api = ApiClient::new(config.clone(), transport.clone(), session, navigator.clone());

        let notifications = NotificationCenter::new();
        let confirm = ConfirmService::new();
        let services = AppServices {
            api: api.clone(),
            notifier: Rc::new(notifications),
            confirmer: Rc::new(confirm),
            downloader: Rc::new(BrowserDownloader),
        };

        Self {
            services: StoredValue::new_local(services),
            auth: StoredValue::new_local(AuthService::new(api, navigator)),
            uploader: StoredValue::new_local(ImageUploader::new(config, transport)),
            notifications,
            confirm,
        }
    }

    pub fn services(&self) -> AppServices {
        self.services.get_value()
    }

    pub fn auth(&self) -> AuthService {
        self.auth.get_value()
    }

    pub fn uploader(&self) -> ImageUploader {
        self.uploader.get_value()
    }

    pub fn page_size_options(&self) -> Vec<usize> {
        self.services.with_value(|s| s.config().page_size_options.clone())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
