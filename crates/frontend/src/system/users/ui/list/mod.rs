use crate::shared::components::filters::FilterSelect;
use crate::shared::components::form_fields::enum_options;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::list_page::ListPage;
use crate::system::auth::guard::RequireAdmin;
use crate::system::users::ui::details::UserDetails;
use contracts::domain::common::{or_na, Lookups};
use contracts::shared::list_filter::keys;
use contracts::system::users::{User, UserRole};
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Username", "Full name", "Role", "Email", "Active"];

fn cells(user: &User, _lookups: &Lookups) -> Vec<String> {
    vec![
        user.username.clone(),
        or_na(&user.full_name),
        user.role.display_name().to_string(),
        user.email.clone(),
        if user.is_active { "Yes" } else { "No" }.to_string(),
    ]
}

#[component]
fn UserListInner() -> impl IntoView {
    let page = ListPage::<User>::mount(use_app().services());
    let role_options = enum_options(UserRole::all(), UserRole::code, UserRole::display_name);

    view! {
        <ListFrame
            page=page
            title="Users"
            columns=COLUMNS
            cells=cells
            search_placeholder="Username, name or email..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect page=page key=keys::ROLE label="Role" options=role_options.clone() />
                }
            })
        >
            <UserDetails page=page />
        </ListFrame>
    }
}

/// Staff accounts; administrators only
#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    view! {
        <RequireAdmin>
            <UserListInner />
        </RequireAdmin>
    }
}
