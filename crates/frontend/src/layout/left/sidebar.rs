//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            icon: "dashboard",
            items: vec![("d001_monthly_overview", "dashboard")],
            admin_only: false,
        },
        MenuGroup {
            id: "fleet",
            label: "Fleet",
            icon: "truck",
            items: vec![
                ("a002_vehicle", "truck"),
                ("a001_driver", "id-card"),
                ("a003_transport", "route"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "maintenance",
            label: "Maintenance",
            icon: "wrench",
            items: vec![
                ("a004_maintenance", "wrench"),
                ("a005_tire_maintenance", "tire"),
                ("a006_fuel", "fuel"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "wallet",
            items: vec![
                ("a007_advance", "cash"),
                ("a008_payment", "wallet"),
                ("a009_invoice", "receipt"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "hr",
            label: "HR",
            icon: "users",
            items: vec![("a010_attendance", "calendar")],
            admin_only: false,
        },
        MenuGroup {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![("sys_users", "users")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let auth = use_auth();

    let expanded_groups = RwSignal::new(vec!["dashboards", "fleet"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let admin_only = group.admin_only;
                    let items = StoredValue::new(group.items);

                    view! {
                        <Show when=move || !admin_only || auth.is_admin()>
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| {
                                        expanded_groups.update(|open| {
                                            if let Some(pos) = open.iter().position(|g| *g == group_id) {
                                                open.remove(pos);
                                            } else {
                                                open.push(group_id);
                                            }
                                        });
                                    }
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(group.icon)}
                                        <span>{group.label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=move || {
                                            expanded_groups.with(|open| open.contains(&group_id))
                                        }
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>

                                <Show when=move || expanded_groups.with(|open| open.contains(&group_id))>
                                    <div class="app-sidebar__children">
                                        {items
                                            .get_value()
                                            .into_iter()
                                            .map(|(key, icon_name)| {
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            ctx.active.with(|a| a.as_deref() == Some(key))
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.open_tab(key)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{tab_label_for_key(key).to_string()}</span>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        </Show>
                    }
                })
                .collect_view()}
        </div>
    }
}
