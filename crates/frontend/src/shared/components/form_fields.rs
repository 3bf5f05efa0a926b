//! Labelled inputs for the edit modals. Each shows its validation message
//! underneath and can be disabled reactively.

use client::form::ResourceDraft;
use leptos::prelude::*;

use crate::shared::form::FormHandle;

#[component]
fn FieldError(#[prop(into)] error: MaybeProp<String>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="form-group__error">{e}</div> })
}

#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// HTML input type ("text", "number", "date", "time", "month", "email", ...)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] step: Option<&'static str>,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class="form-group" class:form-group--invalid=has_error>
            <label>
                {label}
                {required.then(|| view! { <span class="form-group__required">" *"</span> })}
            </label>
            <input
                type=input_type
                placeholder=placeholder
                step=step
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get().unwrap_or(false)
            />
            <FieldError error=error />
        </div>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group form-group--wide">
            <label>{label}</label>
            <textarea
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get().unwrap_or(false)
            ></textarea>
            <FieldError error=error />
        </div>
    }
}

/// Select over (value, label) pairs. `placeholder` adds an empty first
/// option for "nothing chosen".
#[component]
pub fn SelectField(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(optional)] placeholder: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] error: MaybeProp<String>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
) -> impl IntoView {
    let has_error = move || error.get().is_some();

    view! {
        <div class="form-group" class:form-group--invalid=has_error>
            <label>
                {label}
                {required.then(|| view! { <span class="form-group__required">" *"</span> })}
            </label>
            <select
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get().unwrap_or(false)
            >
                {placeholder.map(|text| {
                    view! { <option value="" selected=move || value.with(String::is_empty)>{text}</option> }
                })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(code, text)| {
                            let selected_code = code.clone();
                            view! {
                                <option value=code selected=move || value.get() == selected_code>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
            <FieldError error=error />
        </div>
    }
}

/// (code, label) pairs for an enum, for `SelectField`
pub fn enum_options<T>(
    all: Vec<T>,
    code: fn(&T) -> &'static str,
    label: fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|item| (code(item).to_string(), label(item).to_string()))
        .collect()
}

/// Read-only figure computed from other fields (net pay, unit price)
#[component]
pub fn Preview(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="form-group form-group--preview">
            <label>{label}</label>
            <div class="form-group__preview">{move || value.get()}</div>
        </div>
    }
}

/// Backend error line plus Cancel/Save. Save submits the enclosing form.
#[component]
pub fn FormActions<D>(form: FormHandle<D>, on_cancel: Callback<()>) -> impl IntoView
where
    D: ResourceDraft + Send + Sync + 'static,
{
    let submitting = form.submitting();
    let backend_error = form.backend_error();

    view! {
        {move || backend_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
        <div class="details-actions">
            <button type="button" class="button button--secondary" on:click=move |_| on_cancel.run(())>
                "Cancel"
            </button>
            <button type="submit" class="button button--primary" disabled=move || submitting.get()>
                {move || if submitting.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}
