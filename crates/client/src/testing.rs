//! In-memory doubles for the core's seams.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use crate::config::AppConfig;
use crate::error::TransportError;
use crate::http::client::ApiClient;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use crate::services::{
    AppServices, ConfirmRequest, Confirmer, DownloadedFile, Downloader, Navigator, Notification,
    NotificationLevel, Notifier,
};
use crate::session::SessionStore;

pub const TEST_API_BASE: &str = "http://api.test";

/// Returns `Pending` once so that concurrently joined futures interleave
struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// Answers requests from per-route queues. The last queued response of a
/// route is repeated once the queue is down to one entry.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: RefCell<HashMap<(HttpMethod, String), VecDeque<HttpResponse>>>,
    failures: RefCell<VecDeque<String>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: HttpMethod, path: &str, response: HttpResponse) {
        self.routes
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }

    pub fn on_json(&self, method: HttpMethod, path: &str, status: u16, body: &str) {
        self.on(method, path, HttpResponse::new(status, body.as_bytes().to_vec()));
    }

    pub fn fail_next(&self, message: &str) {
        self.failures.borrow_mut().push_back(message.to_string());
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    /// Number of requests sent to `path` with `method`
    pub fn count(&self, method: HttpMethod, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && route_path(&r.url) == path)
            .count()
    }
}

fn route_path(url: &str) -> String {
    let prefix = format!("{}/api/v1/", TEST_API_BASE);
    let path = url.strip_prefix(&prefix).unwrap_or(url);
    path.split('?').next().unwrap_or(path).to_string()
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        YieldNow(false).await;

        if let Some(message) = self.failures.borrow_mut().pop_front() {
            return Err(TransportError(message));
        }

        let key = (request.method, route_path(&request.url));
        let mut routes = self.routes.borrow_mut();
        let response = match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front(),
            Some(queue) => queue.front().cloned(),
            None => None,
        };
        Ok(response.unwrap_or_else(|| HttpResponse::new(404, br#"{"message":"Not found"}"#.to_vec())))
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn hard_redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .map(|n| n.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

/// Answers every confirmation with a fixed choice
pub struct ScriptedConfirmer {
    answer: bool,
    asked: Cell<usize>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Cell::new(0),
        }
    }

    pub fn asked(&self) -> usize {
        self.asked.get()
    }
}

#[async_trait(?Send)]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, _request: ConfirmRequest) -> bool {
        self.asked.set(self.asked.get() + 1);
        self.answer
    }
}

#[derive(Default)]
pub struct RecordingDownloader {
    files: RefCell<Vec<DownloadedFile>>,
}

impl RecordingDownloader {
    pub fn files(&self) -> Vec<DownloadedFile> {
        self.files.borrow().clone()
    }
}

impl Downloader for RecordingDownloader {
    fn download(&self, file: DownloadedFile) -> Result<(), String> {
        self.files.borrow_mut().push(file);
        Ok(())
    }
}

pub fn test_config() -> AppConfig {
    AppConfig::default().with_api_base(TEST_API_BASE)
}

pub fn api_client(
    transport: Rc<ScriptedTransport>,
    session: SessionStore,
    navigator: Rc<RecordingNavigator>,
) -> ApiClient {
    ApiClient::new(test_config(), transport, session, navigator)
}

/// Fully wired services with handles to every double
pub struct Harness {
    pub transport: Rc<ScriptedTransport>,
    pub navigator: Rc<RecordingNavigator>,
    pub notifier: Rc<RecordingNotifier>,
    pub confirmer: Rc<ScriptedConfirmer>,
    pub downloader: Rc<RecordingDownloader>,
    pub services: AppServices,
}

impl Harness {
    pub fn new(confirm_answer: bool) -> Self {
        let transport = Rc::new(ScriptedTransport::new());
        let navigator = Rc::new(RecordingNavigator::default());
        let notifier = Rc::new(RecordingNotifier::default());
        let confirmer = Rc::new(ScriptedConfirmer::answering(confirm_answer));
        let downloader = Rc::new(RecordingDownloader::default());
        let session = SessionStore::in_memory();
        session.set(crate::session::Session {
            token: "test-token".into(),
            user: None,
        });
        let services = AppServices {
            api: api_client(transport.clone(), session, navigator.clone()),
            notifier: notifier.clone(),
            confirmer: confirmer.clone(),
            downloader: downloader.clone(),
        };
        Self {
            transport,
            navigator,
            notifier,
            confirmer,
            downloader,
            services,
        }
    }
}
