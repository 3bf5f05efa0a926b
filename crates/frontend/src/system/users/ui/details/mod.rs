use client::drafts::users::UserDraft;
use contracts::system::users::{User, UserRole};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextField};
use crate::shared::components::image_upload::ImageUpload;
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

/// Create or edit a staff account. The password is set only on create;
/// afterwards the owner changes it through activation.
#[component]
pub fn UserDetails(page: ListPage<User>) -> impl IntoView {
    let form = FormHandle::<UserDraft>::for_selection(page.selected().as_ref());
    let is_edit = form.is_edit();
    let title = if is_edit { "Edit user" } else { "New user" };
    let close = Callback::new(move |_| page.close_modal());
    let is_active = form.derive(|d| d.is_active);
    let submitting = form.submitting();

    view! {
        <Modal title=title.to_string() on_close=close>
            <form
                class="details-form"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    page.submit(form);
                }
            >
                <div class="form-grid">
                    <TextField
                        label="Username"
                        required=true
                        value=form.value(|d| d.username.clone())
                        on_input=form.setter(|d, v| d.username = v)
                        error=form.error("username")
                        disabled=form.locked("username")
                    />
                    <TextField
                        label="Email"
                        input_type="email"
                        required=true
                        value=form.value(|d| d.email.clone())
                        on_input=form.setter(|d, v| d.email = v)
                        error=form.error("email")
                        disabled=form.locked("email")
                    />
                    <TextField
                        label="Full name"
                        value=form.value(|d| d.full_name.clone())
                        on_input=form.setter(|d, v| d.full_name = v)
                        disabled=form.locked("fullName")
                    />
                    <SelectField
                        label="Role"
                        required=true
                        options=enum_options(UserRole::all(), UserRole::code, UserRole::display_name)
                        value=form.value(|d| d.role.code().to_string())
                        on_change=form.setter(|d, v| {
                            if let Some(role) = UserRole::from_code(&v) {
                                d.role = role;
                            }
                        })
                        disabled=form.locked("role")
                    />
                    {(!is_edit).then(|| view! {
                        <TextField
                            label="Password"
                            input_type="password"
                            required=true
                            value=form.value(|d| d.password.clone())
                            on_input=form.setter(|d, v| d.password = v)
                            error=form.error("password")
                            disabled=form.locked("password")
                        />
                    })}
                    {is_edit.then(|| view! {
                        <div class="form-group form-group--checkbox">
                            <label>
                                <input
                                    type="checkbox"
                                    prop:checked=move || is_active.get()
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        form.update(|d| d.is_active = checked);
                                    }
                                    disabled=move || submitting.get()
                                />
                                " Active"
                            </label>
                        </div>
                    })}
                    <ImageUpload
                        label="Profile picture"
                        value=form.value(|d| d.profile_image.clone().unwrap_or_default())
                        on_change=form.setter(|d, v| d.profile_image = (!v.is_empty()).then_some(v))
                        disabled=submitting
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
