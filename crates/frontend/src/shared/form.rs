//! Signal wrapper around `FormState` used by every edit modal.

use client::form::{FormMode, FormState, ResourceDraft};
use leptos::prelude::*;

pub struct FormHandle<D: Send + Sync + 'static> {
    state: RwSignal<FormState<D>>,
}

impl<D: Send + Sync + 'static> Clone for FormHandle<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormHandle<D> {}

impl<D> FormHandle<D>
where
    D: ResourceDraft + Send + Sync + 'static,
{
    /// Edit form for the selected record, or a blank create form
    pub fn for_selection(selected: Option<&D::Record>) -> Self {
        Self {
            state: RwSignal::new(FormState::for_selection(selected)),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.state.with_untracked(FormState::is_edit)
    }

    /// Bound value of one draft field
    pub fn value(&self, get: fn(&D) -> String) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(|f| get(&f.draft)))
    }

    pub fn setter(&self, set: fn(&mut D, String)) -> Callback<String> {
        let state = self.state;
        Callback::new(move |value| state.update(|f| set(&mut f.draft, value)))
    }

    /// Any derived view of the draft (previews, conditional fields)
    pub fn derive<T>(&self, f: fn(&D) -> T) -> Signal<T>
    where
        T: Send + Sync + Clone + 'static,
    {
        let state = self.state;
        Signal::derive(move || state.with(|form| f(&form.draft)))
    }

    pub fn update(&self, f: impl FnOnce(&mut D)) {
        self.state.update(|form| f(&mut form.draft));
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.field_error(field).map(str::to_string)))
    }

    /// Disabled while submitting, and for identity fields in edit mode
    pub fn locked(&self, field: &'static str) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.submitting || f.is_locked(field)))
    }

    pub fn submitting(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.submitting))
    }

    /// Message of the last rejected save
    pub fn backend_error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|f| f.error.clone()))
    }

    pub fn begin_submit(&self) -> Option<(FormMode, D::Payload)> {
        self.state.try_update(|f| f.begin_submit()).flatten()
    }

    /// No-op when the modal has already closed
    pub fn finish_submit(&self, result: Result<(), String>) {
        self.state.try_update(|f| f.finish_submit(result));
    }
}
