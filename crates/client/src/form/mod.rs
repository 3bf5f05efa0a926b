//! Edit/create form state shared by every resource modal.
//!
//! A draft holds the raw input strings; `ResourceDraft::validate` turns it
//! into the typed payload or a set of field errors before anything is sent.

pub mod validate;

use contracts::domain::common::{RecordId, Resource};
use serde::Serialize;
use std::collections::BTreeMap;

pub use validate::Validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Field key -> message. Keys are the payload's JSON field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the first message recorded for a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Raw form input for one resource
pub trait ResourceDraft: Clone + Default {
    type Record: Resource;
    type Payload: Serialize;

    /// Identity fields disabled while editing
    const LOCKED_ON_EDIT: &'static [&'static str] = &[];

    fn from_record(record: &Self::Record) -> Self;

    fn validate(&self, mode: FormMode) -> Result<Self::Payload, ValidationErrors>;
}

#[derive(Debug, Clone)]
pub struct FormState<D> {
    pub draft: D,
    pub mode: FormMode,
    pub submitting: bool,
    /// Backend error shown above the buttons
    pub error: Option<String>,
    pub field_errors: ValidationErrors,
}

impl<D: ResourceDraft> FormState<D> {
    pub fn create() -> Self {
        Self {
            draft: D::default(),
            mode: FormMode::Create,
            submitting: false,
            error: None,
            field_errors: ValidationErrors::new(),
        }
    }

    pub fn edit(record: &D::Record) -> Self {
        Self {
            draft: D::from_record(record),
            mode: FormMode::Edit(record.id()),
            ..Self::create()
        }
    }

    /// Seed from the list's selected record, or blank when there is none
    pub fn for_selection(selected: Option<&D::Record>) -> Self {
        match selected {
            Some(record) => Self::edit(record),
            None => Self::create(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.mode.is_edit()
    }

    pub fn is_locked(&self, field: &str) -> bool {
        self.is_edit() && D::LOCKED_ON_EDIT.contains(&field)
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field)
    }

    /// Validate and mark the form as submitting.
    ///
    /// `None` when a submit is already running or validation failed; in the
    /// latter case `field_errors` says why and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<(FormMode, D::Payload)> {
        if self.submitting {
            return None;
        }
        self.error = None;
        match self.draft.validate(self.mode) {
            Ok(payload) => {
                self.field_errors = ValidationErrors::new();
                self.submitting = true;
                Some((self.mode, payload))
            }
            Err(errors) => {
                log::debug!("form rejected with {} field error(s)", errors.len());
                self.field_errors = errors;
                None
            }
        }
    }

    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.submitting = false;
        self.error = result.err();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drafts::a007_advance::AdvanceDraft;
    use contracts::domain::a007_advance::aggregate::Advance;

    fn advance() -> Advance {
        serde_json::from_str(
            r#"{"id":5,"recipientType":"user","recipientId":3,"amount":2500,
                "date":"2024-05-10","month":"2024-05","reason":null}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_identity_fields_locked_only_when_editing() {
        let create = FormState::<AdvanceDraft>::create();
        assert!(!create.is_locked("recipientId"));

        let edit = FormState::<AdvanceDraft>::edit(&advance());
        assert_eq!(edit.mode, FormMode::Edit(5));
        assert!(edit.is_locked("recipientType"));
        assert!(edit.is_locked("recipientId"));
        assert!(edit.is_locked("month"));
        assert!(!edit.is_locked("amount"));
    }

    #[test]
    fn test_invalid_draft_never_starts_submitting() {
        let mut form = FormState::<AdvanceDraft>::create();
        assert!(form.begin_submit().is_none());
        assert!(!form.submitting);
        assert_eq!(form.field_error("amount"), Some("Amount is required"));
        assert!(form.field_error("recipientId").is_some());
    }

    #[test]
    fn test_submit_cycle() {
        let mut form = FormState::<AdvanceDraft>::edit(&advance());
        let (mode, payload) = form.begin_submit().unwrap();
        assert_eq!(mode, FormMode::Edit(5));
        assert_eq!(payload.amount, 2500.0);
        assert!(form.submitting);
        assert!(form.begin_submit().is_none());

        form.finish_submit(Err("Advance exceeds monthly limit".into()));
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Advance exceeds monthly limit"));

        form.begin_submit().unwrap();
        form.finish_submit(Ok(()));
        assert!(form.error.is_none());
    }

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("cost", "Cost is required");
        errors.add("cost", "Cost must be a number");
        assert_eq!(errors.get("cost"), Some("Cost is required"));
        assert_eq!(errors.len(), 1);
    }
}
