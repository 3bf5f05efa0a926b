//! Fetch -> filter -> paginate -> mutate orchestration for one resource.

use contracts::domain::common::{Lookups, RecordId, Resource};
use contracts::shared::export::ExportFormat;
use contracts::shared::list_filter::ListFilter;
use serde::Serialize;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use super::export::export_filename;
use super::lookups::load_lookups;
use super::state::ListViewState;
use crate::error::ApiError;
use crate::form::FormMode;
use crate::http::HttpMethod;
use crate::services::{AppServices, ConfirmRequest, DownloadedFile};

/// Where a controller keeps its `ListViewState`.
///
/// Both accessors return `None` once the owning view has been disposed, so
/// a response arriving after unmount is dropped instead of panicking.
pub trait StateStore<R> {
    fn with_state<T>(&self, f: impl FnOnce(&ListViewState<R>) -> T) -> Option<T>;
    fn update_state<T>(&self, f: impl FnOnce(&mut ListViewState<R>) -> T) -> Option<T>;
}

impl<R> StateStore<R> for Rc<RefCell<ListViewState<R>>> {
    fn with_state<T>(&self, f: impl FnOnce(&ListViewState<R>) -> T) -> Option<T> {
        Some(f(&self.borrow()))
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut ListViewState<R>) -> T) -> Option<T> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Items replaced with this many records
    Loaded(usize),
    /// Another fetch was already in flight
    Skipped,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
}

pub struct ResourceListController<R, S> {
    services: AppServices,
    store: S,
    _record: PhantomData<fn() -> R>,
}

impl<R, S> ResourceListController<R, S>
where
    R: Resource,
    S: StateStore<R>,
{
    pub fn new(services: AppServices, store: S) -> Self {
        Self {
            services,
            store,
            _record: PhantomData,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn services(&self) -> &AppServices {
        &self.services
    }

    // ============================================================================
    // Fetch
    // ============================================================================

    /// Load the list and its lookup tables for the active filter.
    ///
    /// No-op while another fetch is in flight. On failure the current items
    /// stay as they are and the user gets a notification.
    pub async fn fetch_list(&self) -> FetchOutcome {
        let claimed = self
            .store
            .update_state(|s| {
                if s.loading {
                    false
                } else {
                    s.loading = true;
                    true
                }
            })
            .unwrap_or(false);
        if !claimed {
            log::debug!("{}: fetch skipped, one already in flight", R::collection_path());
            return FetchOutcome::Skipped;
        }

        let filter = self
            .store
            .with_state(|s| s.filter.clone())
            .unwrap_or_default();

        match self.load(&filter).await {
            Ok((items, lookups)) => {
                let count = items.len();
                self.store.update_state(|s| {
                    s.replace_items(items, lookups);
                    s.loading = false;
                });
                log::debug!("{}: loaded {} records", R::collection_path(), count);
                FetchOutcome::Loaded(count)
            }
            Err(err) => {
                self.store.update_state(|s| s.loading = false);
                if !err.is_unauthorized() {
                    log::error!("{}: fetch failed: {}", R::collection_path(), err);
                    self.services.notifier.error(format!(
                        "Failed to load {}: {}",
                        R::list_name().to_lowercase(),
                        err.user_message()
                    ));
                }
                FetchOutcome::Failed
            }
        }
    }

    async fn load(&self, filter: &ListFilter) -> Result<(Vec<R>, Lookups), ApiError> {
        let api = &self.services.api;
        futures::try_join!(
            api.get_json::<Vec<R>>(R::collection_path(), Some(filter)),
            load_lookups(api, R::lookups()),
        )
    }

    // ============================================================================
    // Search / filter / paging
    // ============================================================================

    /// Client-side only; never touches the network
    pub fn apply_search(&self, term: &str) {
        self.store.update_state(|s| s.set_search_term(term));
    }

    /// Store new server-side criteria and re-fetch
    pub async fn apply_filter(&self, filter: ListFilter) -> FetchOutcome {
        self.store.update_state(|s| s.filter = filter);
        self.fetch_list().await
    }

    pub async fn reset_filter(&self) -> FetchOutcome {
        self.apply_filter(ListFilter::new()).await
    }

    /// Rows of `page` of the filtered view
    pub fn paginate(&self, page: usize) -> Vec<R> {
        self.store.with_state(|s| s.page(page)).unwrap_or_default()
    }

    pub fn go_to_page(&self, page: usize) {
        self.store.update_state(|s| s.go_to_page(page));
    }

    pub fn set_items_per_page(&self, items_per_page: usize) {
        self.store
            .update_state(|s| s.set_items_per_page(items_per_page));
    }

    // ============================================================================
    // Modal
    // ============================================================================

    pub fn open_create(&self) {
        self.store.update_state(|s| s.open_create());
    }

    pub fn open_edit(&self, record: R) {
        self.store.update_state(|s| s.open_edit(record));
    }

    pub fn close_modal(&self) {
        self.store.update_state(|s| s.close_modal());
    }

    // ============================================================================
    // Mutations
    // ============================================================================

    /// POST a new record. The error is returned so the form can stay open.
    pub async fn create<P: Serialize>(&self, payload: &P) -> Result<(), ApiError> {
        self.mutate(HttpMethod::Post, R::collection_path().to_string(), payload, "created")
            .await
    }

    /// PUT over an existing record (last write wins)
    pub async fn update<P: Serialize>(&self, id: RecordId, payload: &P) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::collection_path(), id);
        self.mutate(HttpMethod::Put, path, payload, "updated").await
    }

    /// `create` or `update` depending on how the form was opened
    pub async fn save<P: Serialize>(&self, mode: FormMode, payload: &P) -> Result<(), ApiError> {
        match mode {
            FormMode::Create => self.create(payload).await,
            FormMode::Edit(id) => self.update(id, payload).await,
        }
    }

    async fn mutate<P: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &P,
        verb: &str,
    ) -> Result<(), ApiError> {
        match self.services.api.send_json(method, &path, payload).await {
            Ok(()) => {
                self.store.update_state(|s| s.close_modal());
                self.services
                    .notifier
                    .success(format!("{} {}", R::element_name(), verb));
                self.fetch_list().await;
                Ok(())
            }
            Err(err) => {
                if !err.is_unauthorized() {
                    self.services.notifier.error(err.user_message());
                }
                Err(err)
            }
        }
    }

    /// Ask for confirmation, then DELETE and re-fetch.
    /// Nothing is sent unless the user confirms.
    pub async fn delete(&self, record: &R) -> DeleteOutcome {
        let name = self
            .store
            .with_state(|s| record.display_name(&s.lookups))
            .unwrap_or_else(|| record.id().to_string());

        let confirmed = self
            .services
            .confirmer
            .confirm(ConfirmRequest {
                title: format!("Delete {}", R::element_name().to_lowercase()),
                message: format!("Delete \"{}\"? This cannot be undone.", name),
                confirm_label: "Delete".to_string(),
            })
            .await;
        if !confirmed {
            return DeleteOutcome::Cancelled;
        }

        let path = format!("{}/{}", R::collection_path(), record.id());
        match self.services.api.delete(&path).await {
            Ok(()) => {
                self.services
                    .notifier
                    .success(format!("{} deleted", R::element_name()));
                self.fetch_list().await;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                if !err.is_unauthorized() {
                    self.services.notifier.error(err.user_message());
                }
                DeleteOutcome::Failed
            }
        }
    }

    // ============================================================================
    // Export
    // ============================================================================

    /// Download the server-side report for the active filter.
    /// Returns the file name on success.
    pub async fn download_export(&self, format: ExportFormat) -> Option<String> {
        let filter = self
            .store
            .with_state(|s| s.filter.clone())
            .unwrap_or_default();
        let path = format!("{}/export/{}", R::collection_path(), format.path_segment());
        let filename = export_filename(R::export_stem(), &filter, format);

        let result = match self.services.api.get_bytes(&path, Some(&filter)).await {
            Ok(response) => self
                .services
                .downloader
                .download(DownloadedFile {
                    filename: filename.clone(),
                    content_type: response
                        .content_type
                        .unwrap_or_else(|| format.mime_type().to_string()),
                    bytes: response.body,
                })
                .map_err(|e| {
                    log::error!("download of {} failed: {}", filename, e);
                    "Could not save the downloaded file.".to_string()
                }),
            Err(err) if err.is_unauthorized() => return None,
            Err(err) => Err(err.user_message()),
        };

        match result {
            Ok(()) => Some(filename),
            Err(message) => {
                self.services.notifier.error(format!(
                    "{} export failed: {}",
                    format.display_name(),
                    message
                ));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::a001_driver::DriverDraft;
    use crate::form::FormState;
    use crate::services::NotificationLevel;
    use crate::testing::Harness;
    use contracts::domain::a001_driver::aggregate::Driver;
    use contracts::domain::a008_payment::aggregate::Payment;
    use contracts::domain::common::or_na;
    use contracts::shared::list_filter::keys;

    type Store<R> = Rc<RefCell<ListViewState<R>>>;

    fn controller<R: Resource>(harness: &Harness) -> ResourceListController<R, Store<R>> {
        ResourceListController::new(
            harness.services.clone(),
            Rc::new(RefCell::new(ListViewState::new(10))),
        )
    }

    const TWO_DRIVERS: &str = r#"[
        {"id":1,"name":"A. Perera","licenseNumber":"B1000","nicNo":"901111111V"},
        {"id":2,"name":"K. Fernando","licenseNumber":"B1001","nicNo":"902222222V"}
    ]"#;

    #[tokio::test]
    async fn test_fetch_replaces_items_and_resets_page() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        let c = controller::<Driver>(&h);
        c.store().borrow_mut().current_page = 4;

        assert_eq!(c.fetch_list().await, FetchOutcome::Loaded(2));

        let state = c.store().borrow();
        assert_eq!(state.current_page, 1);
        assert!(!state.loading);
        assert_eq!(state.filtered_count(), state.items.len());
    }

    #[tokio::test]
    async fn test_concurrent_fetch_issues_one_request() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        let c = controller::<Driver>(&h);

        let (first, second) = futures::join!(c.fetch_list(), c.fetch_list());

        assert_eq!(first, FetchOutcome::Loaded(2));
        assert_eq!(second, FetchOutcome::Skipped);
        assert_eq!(h.transport.count(HttpMethod::Get, "drivers"), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_items_and_notifies() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        h.transport
            .on_json(HttpMethod::Get, "drivers", 500, r#"{"message":"db down"}"#);
        let c = controller::<Driver>(&h);

        c.fetch_list().await;
        assert_eq!(c.fetch_list().await, FetchOutcome::Failed);

        assert_eq!(c.store().borrow().items.len(), 2);
        assert!(!c.store().borrow().loading);
        assert_eq!(
            h.notifier.messages(NotificationLevel::Error),
            vec!["Failed to load drivers: db down".to_string()]
        );
    }

    #[tokio::test]
    async fn test_lookups_fetched_with_primary_list() {
        let h = Harness::new(true);
        h.transport.on_json(
            HttpMethod::Get,
            "payments",
            200,
            r#"[{"id":9,"recipientType":"driver","recipientId":2,"month":"2024-05",
                 "baseAmount":50000,"deductions":2000,"advancesDeducted":3000}]"#,
        );
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        h.transport.on_json(HttpMethod::Get, "users", 200, "[]");
        let c = controller::<Payment>(&h);

        c.apply_filter(ListFilter::new().with(keys::MONTH, "2024-05"))
            .await;

        let state = c.store().borrow();
        assert_eq!(state.items[0].recipient_name(&state.lookups), "K. Fernando");
        assert_eq!(state.items[0].net_pay(), 45000.0);
        drop(state);
        c.apply_search("fernando");
        assert_eq!(c.paginate(1).len(), 1);
        c.apply_search("perera");
        assert!(c.paginate(1).is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_fails_the_whole_fetch() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "payments", 200, "[]");
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        h.transport.on_json(HttpMethod::Get, "users", 503, "");
        let c = controller::<Payment>(&h);

        assert_eq!(c.fetch_list().await, FetchOutcome::Failed);
        assert!(!c.store().borrow().is_loaded);
    }

    #[tokio::test]
    async fn test_search_issues_no_request() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        let c = controller::<Driver>(&h);
        c.fetch_list().await;
        let before = h.transport.requests().len();

        c.apply_search("perera");
        c.apply_search("perera");

        assert_eq!(h.transport.requests().len(), before);
        assert_eq!(c.store().borrow().filtered_count(), 1);
    }

    #[tokio::test]
    async fn test_delete_cancelled_sends_nothing() {
        let h = Harness::new(false);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        let c = controller::<Driver>(&h);
        c.fetch_list().await;
        let record = c.store().borrow().items[0].clone();

        assert_eq!(c.delete(&record).await, DeleteOutcome::Cancelled);
        assert_eq!(h.confirmer.asked(), 1);
        assert_eq!(h.transport.count(HttpMethod::Delete, "drivers/1"), 0);
    }

    #[tokio::test]
    async fn test_delete_confirmed_deletes_and_refetches() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        h.transport.on_json(
            HttpMethod::Get,
            "drivers",
            200,
            r#"[{"id":2,"name":"K. Fernando","licenseNumber":"B1001","nicNo":"902222222V"}]"#,
        );
        h.transport.on_json(HttpMethod::Delete, "drivers/1", 204, "");
        let c = controller::<Driver>(&h);
        c.fetch_list().await;
        let record = c.store().borrow().items[0].clone();

        assert_eq!(c.delete(&record).await, DeleteOutcome::Deleted);
        assert_eq!(h.transport.count(HttpMethod::Delete, "drivers/1"), 1);
        assert_eq!(c.store().borrow().items.len(), 1);
    }

    #[tokio::test]
    async fn test_update_failure_returns_error_and_keeps_modal() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        h.transport.on_json(
            HttpMethod::Put,
            "drivers/1",
            409,
            r#"{"message":"License number already registered"}"#,
        );
        let c = controller::<Driver>(&h);
        c.fetch_list().await;
        let record = c.store().borrow().items[0].clone();
        c.open_edit(record.clone());

        let mut form = FormState::<DriverDraft>::edit(&record);
        let (mode, payload) = form.begin_submit().unwrap();
        let result = c.save(mode, &payload).await;
        form.finish_submit(result.map_err(|e| e.user_message()));

        assert!(c.store().borrow().is_modal_open());
        assert_eq!(form.error.as_deref(), Some("License number already registered"));
        assert!(!form.submitting);
        assert_eq!(h.transport.count(HttpMethod::Get, "drivers"), 1);
    }

    #[tokio::test]
    async fn test_create_driver_end_to_end() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "drivers", 200, TWO_DRIVERS);
        h.transport.on_json(
            HttpMethod::Get,
            "drivers",
            200,
            r#"[
                {"id":1,"name":"A. Perera","licenseNumber":"B1000","nicNo":"901111111V"},
                {"id":2,"name":"K. Fernando","licenseNumber":"B1001","nicNo":"902222222V"},
                {"id":3,"name":"J. Silva","licenseNumber":"B1234","nicNo":"912345678V",
                 "phone":null,"address":null,"licenseExpiry":null,"profileImage":null,"status":null}
            ]"#,
        );
        h.transport
            .on_json(HttpMethod::Post, "drivers", 201, r#"{"id":3}"#);
        let c = controller::<Driver>(&h);
        c.fetch_list().await;
        c.open_create();

        let mut form = FormState::<DriverDraft>::create();
        form.draft.name = "J. Silva".into();
        form.draft.license_number = "B1234".into();
        form.draft.nic_no = "912345678V".into();
        let (mode, payload) = form.begin_submit().unwrap();
        assert!(form.submitting);
        let result = c.save(mode, &payload).await;
        form.finish_submit(result.map_err(|e| e.user_message()));

        assert!(form.error.is_none());
        let state = c.store().borrow();
        assert!(!state.is_modal_open());
        assert_eq!(state.items.len(), 3);
        let created = state.items.iter().find(|d| d.name == "J. Silva").unwrap();
        assert_eq!(created.license_number, "B1234");
        assert_eq!(created.nic_no, "912345678V");
        assert_eq!(or_na(&created.phone), "N/A");
        assert_eq!(or_na(&created.license_expiry), "N/A");

        let post = h
            .transport
            .requests()
            .into_iter()
            .find(|r| r.method == HttpMethod::Post)
            .unwrap();
        match post.body {
            Some(crate::http::RequestBody::Json(body)) => {
                let value: serde_json::Value = serde_json::from_str(&body).unwrap();
                assert!(value["phone"].is_null());
                assert_eq!(value["licenseNumber"], "B1234");
            }
            other => panic!("unexpected body {:?}", other),
        }
        assert_eq!(
            h.notifier.messages(NotificationLevel::Success),
            vec!["Driver created".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unauthorized_fetch_redirects_without_toast() {
        let h = Harness::new(true);
        h.transport.on_json(HttpMethod::Get, "vehicles", 401, "");
        let c = controller::<contracts::domain::a002_vehicle::aggregate::Vehicle>(&h);

        assert_eq!(c.fetch_list().await, FetchOutcome::Failed);
        assert_eq!(h.navigator.redirects(), vec!["/login".to_string()]);
        assert!(h.notifier.messages(NotificationLevel::Error).is_empty());
    }

    #[tokio::test]
    async fn test_export_uses_filter_for_query_and_filename() {
        let h = Harness::new(true);
        h.transport.on(
            HttpMethod::Get,
            "payments/export/excel",
            crate::http::HttpResponse::new(200, vec![0x50, 0x4b, 0x03, 0x04]),
        );
        let c = controller::<Payment>(&h);
        c.store().borrow_mut().filter = ListFilter::new()
            .with(keys::RECIPIENT_TYPE, "driver")
            .with(keys::MONTH, "2024-05");

        let filename = c.download_export(ExportFormat::Excel).await;

        assert_eq!(filename.as_deref(), Some("payments_2024-05_driver.xlsx"));
        let files = h.downloader.files();
        assert_eq!(files[0].bytes, vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(files[0].content_type, ExportFormat::Excel.mime_type());
        assert!(h.transport.requests()[0]
            .url
            .ends_with("payments/export/excel?month=2024-05&recipientType=driver"));
    }

    #[tokio::test]
    async fn test_export_failure_notifies() {
        let h = Harness::new(true);
        h.transport
            .on_json(HttpMethod::Get, "fuel/export/pdf", 500, r#"{"error":"renderer crashed"}"#);
        let c = controller::<contracts::domain::a006_fuel::aggregate::FuelRecord>(&h);

        assert_eq!(c.download_export(ExportFormat::Pdf).await, None);
        assert!(h.downloader.files().is_empty());
        assert_eq!(
            h.notifier.messages(NotificationLevel::Error),
            vec!["PDF export failed: renderer crashed".to_string()]
        );
    }
}
