use client::dashboard::load_monthly_overview;
use contracts::dashboards::d001_monthly_overview::MonthlyOverview;
use contracts::shared::period::{is_valid_month, month_label};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::stat_card::{StatCard, StatFormat};
use crate::shared::context::use_app;
use crate::shared::date_utils::current_month;

/// Monthly Overview Dashboard component
#[component]
pub fn MonthlyOverviewDashboard() -> impl IntoView {
    let app = use_app();
    let selected_month = RwSignal::new(current_month());

    // Data state
    let data = RwSignal::new(None::<MonthlyOverview>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Load data when the month changes
    Effect::new(move |_| {
        let month = selected_month.get();
        if !is_valid_month(&month) {
            return;
        }
        loading.set(true);
        error.set(None);

        let api = app.services().api;
        spawn_local(async move {
            let result = load_monthly_overview(&api, &month).await;
            // a newer month was picked while this one loaded
            if selected_month.try_get_untracked().as_deref() != Some(month.as_str()) {
                return;
            }
            match result {
                Ok(overview) => {
                    data.try_set(Some(overview));
                }
                Err(e) => {
                    if !e.is_unauthorized() {
                        log::error!("monthly overview {}: {}", month, e);
                        error.try_set(Some(e.user_message()));
                    }
                    data.try_set(None);
                }
            }
            loading.try_set(false);
        });
    });

    let metric = move |f: fn(&MonthlyOverview) -> f64| -> Signal<Option<f64>> {
        Signal::derive(move || data.with(|d| d.as_ref().map(f)))
    };
    let trips_subtitle = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| format!("{:.0} km driven", d.total_distance_km))
        })
    });
    let fuel_subtitle = Signal::derive(move || {
        data.with(|d| {
            d.as_ref()
                .map(|d| format!("{:.2} L at {:.2} per L", d.fuel_litres, d.average_fuel_price))
        })
    });

    view! {
        <div id="d001_monthly_overview--dashboard" class="dashboard">
            <div class="dashboard__header">
                <h2>{move || format!("Overview for {}", month_label(&selected_month.get()))}</h2>
                <label class="filter">
                    <span class="filter__label">"Month"</span>
                    <input
                        type="month"
                        prop:value=move || selected_month.get()
                        on:change=move |ev| selected_month.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <Show when=move || loading.get()>
                <div class="dashboard__loading">"Loading..."</div>
            </Show>

            {move || error.get().map(|err| view! {
                <div class="alert alert--error">
                    <strong>"Error: "</strong>
                    {err}
                </div>
            })}

            <div class="dashboard__grid">
                <CardAnimated delay_ms=0>
                    <StatCard
                        label="Trips"
                        icon_name="route"
                        value=metric(|d| d.trip_count as f64)
                        format=StatFormat::Count
                        subtitle=trips_subtitle
                    />
                </CardAnimated>
                <CardAnimated delay_ms=40>
                    <StatCard label="Income" icon_name="cash" value=metric(|d| d.total_income) format=StatFormat::Money />
                </CardAnimated>
                <CardAnimated delay_ms=80>
                    <StatCard
                        label="Fuel"
                        icon_name="fuel"
                        value=metric(|d| d.fuel_cost)
                        format=StatFormat::Money
                        subtitle=fuel_subtitle
                    />
                </CardAnimated>
                <CardAnimated delay_ms=120>
                    <StatCard
                        label="Maintenance"
                        icon_name="wrench"
                        value=metric(|d| d.maintenance_cost)
                        format=StatFormat::Money
                    />
                </CardAnimated>
                <CardAnimated delay_ms=160>
                    <StatCard
                        label="Advances"
                        icon_name="wallet"
                        value=metric(|d| d.advances_total)
                        format=StatFormat::Money
                    />
                </CardAnimated>
                <CardAnimated delay_ms=200>
                    <StatCard
                        label="Net payroll"
                        icon_name="users"
                        value=metric(|d| d.net_payroll)
                        format=StatFormat::Money
                    />
                </CardAnimated>
                <CardAnimated delay_ms=240>
                    <StatCard
                        label="Operating balance"
                        icon_name="receipt"
                        value=metric(|d| d.operating_balance)
                        format=StatFormat::Money
                        signed=true
                    />
                </CardAnimated>
            </div>
        </div>
    }
}
