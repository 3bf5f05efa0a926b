//! Reactive binding of `ResourceListController` for list pages.

use client::form::{FormMode, ResourceDraft};
use client::list::{ListViewState, ResourceListController, StateStore};
use client::services::AppServices;
use contracts::domain::common::{LookupKind, Resource};
use contracts::shared::export::ExportFormat;
use contracts::shared::list_filter::ListFilter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use std::future::Future;
use std::rc::Rc;

use crate::shared::form::FormHandle;

/// List state kept in a signal. Reads and writes after the page has been
/// unmounted are dropped.
pub struct SignalStore<R: Send + Sync + 'static>(RwSignal<ListViewState<R>>);

impl<R: Resource> StateStore<R> for SignalStore<R> {
    fn with_state<T>(&self, f: impl FnOnce(&ListViewState<R>) -> T) -> Option<T> {
        self.0.try_with_untracked(f)
    }

    fn update_state<T>(&self, f: impl FnOnce(&mut ListViewState<R>) -> T) -> Option<T> {
        self.0.try_update(f)
    }
}

type Controller<R> = ResourceListController<R, SignalStore<R>>;

/// Copyable handle a list page and its children share.
pub struct ListPage<R: Resource> {
    pub state: RwSignal<ListViewState<R>>,
    /// Format of the export currently downloading
    pub exporting: RwSignal<Option<ExportFormat>>,
    controller: StoredValue<Rc<Controller<R>>, LocalStorage>,
}

impl<R: Resource> Clone for ListPage<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for ListPage<R> {}

impl<R: Resource> ListPage<R> {
    pub fn new(services: AppServices) -> Self {
        let state = RwSignal::new(ListViewState::new(services.config().items_per_page));
        let controller = Rc::new(ResourceListController::new(services, SignalStore(state)));
        Self {
            state,
            exporting: RwSignal::new(None),
            controller: StoredValue::new_local(controller),
        }
    }

    /// New page that starts loading right away
    pub fn mount(services: AppServices) -> Self {
        let page = Self::new(services);
        page.refresh();
        page
    }

    fn spawn<F, Fut>(&self, task: F)
    where
        F: FnOnce(Rc<Controller<R>>) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        if let Some(controller) = self.controller.try_get_value() {
            spawn_local(task(controller));
        }
    }

    fn with_controller(&self, f: impl FnOnce(&Controller<R>)) {
        self.controller.try_with_value(|c| f(c));
    }

    // ============================================================================
    // Fetch / search / filter
    // ============================================================================

    pub fn refresh(&self) {
        self.spawn(|c| async move {
            c.fetch_list().await;
        });
    }

    pub fn search(&self, term: &str) {
        self.with_controller(|c| c.apply_search(term));
    }

    /// Change one server-side criterion; blank clears it
    pub fn set_filter(&self, key: &str, value: String) {
        self.update_filter(|filter| filter.set(key, value));
    }

    /// Edit several criteria and re-fetch once
    pub fn update_filter(&self, edit: impl FnOnce(&mut ListFilter)) {
        let Some(mut filter) = self.state.try_with_untracked(|s| s.filter.clone()) else {
            return;
        };
        edit(&mut filter);
        self.spawn(|c| async move {
            c.apply_filter(filter).await;
        });
    }

    pub fn reset_filter(&self) {
        self.spawn(|c| async move {
            c.reset_filter().await;
        });
    }

    /// Current value of a filter criterion, blank when unset
    pub fn filter_value(&self, key: &'static str) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| s.filter.get(key).unwrap_or_default().to_string())
        })
    }

    /// (id, name) pairs of a lookup table, for selects
    pub fn lookup_options(&self, kind: LookupKind) -> Signal<Vec<(String, String)>> {
        let state = self.state;
        Signal::derive(move || {
            state.with(|s| {
                s.lookups
                    .options(kind)
                    .into_iter()
                    .map(|(id, name)| (id.to_string(), name))
                    .collect()
            })
        })
    }

    // ============================================================================
    // Paging
    // ============================================================================

    pub fn go_to_page(&self, page: usize) {
        self.with_controller(|c| c.go_to_page(page));
    }

    pub fn set_page_size(&self, items_per_page: usize) {
        self.with_controller(|c| c.set_items_per_page(items_per_page));
    }

    // ============================================================================
    // Modal / mutations
    // ============================================================================

    pub fn open_create(&self) {
        self.with_controller(|c| c.open_create());
    }

    pub fn open_edit(&self, record: R) {
        self.with_controller(|c| c.open_edit(record));
    }

    pub fn close_modal(&self) {
        self.with_controller(|c| c.close_modal());
    }

    pub fn selected(&self) -> Option<R> {
        self.state
            .try_with_untracked(|s| s.selected_record.clone())
            .flatten()
    }

    pub fn delete(&self, record: R) {
        self.spawn(|c| async move {
            c.delete(&record).await;
        });
    }

    pub fn export(&self, format: ExportFormat) {
        if self.exporting.get_untracked().is_some() {
            return;
        }
        self.exporting.set(Some(format));
        let exporting = self.exporting;
        self.spawn(move |c| async move {
            c.download_export(format).await;
            exporting.try_set(None);
        });
    }

    pub async fn save<P: Serialize>(&self, mode: FormMode, payload: P) -> Result<(), String> {
        match self.controller.try_get_value() {
            Some(c) => c.save(mode, &payload).await.map_err(|e| e.user_message()),
            None => Err("The page was closed".to_string()),
        }
    }

    /// Validate the form and send it. Field errors stay on the form; a
    /// backend error is shown inline and the modal stays open.
    pub fn submit<D>(&self, form: FormHandle<D>)
    where
        D: ResourceDraft<Record = R> + Send + Sync + 'static,
        D::Payload: 'static,
    {
        let Some((mode, payload)) = form.begin_submit() else {
            return;
        };
        let page = *self;
        spawn_local(async move {
            let result = page.save(mode, payload).await;
            form.finish_submit(result);
        });
    }
}
