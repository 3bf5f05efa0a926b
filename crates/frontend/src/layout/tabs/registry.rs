//! Tab content registry: tab.key → View. Every tab key is listed here.

use crate::dashboards::MonthlyOverviewDashboard;
use crate::domain::a001_driver::ui::list::DriverList;
use crate::domain::a002_vehicle::ui::list::VehicleList;
use crate::domain::a003_transport::ui::list::TransportList;
use crate::domain::a004_maintenance::ui::list::MaintenanceList;
use crate::domain::a005_tire_maintenance::ui::list::TireMaintenanceList;
use crate::domain::a006_fuel::ui::list::FuelList;
use crate::domain::a007_advance::ui::list::AdvanceList;
use crate::domain::a008_payment::ui::list::PaymentList;
use crate::domain::a009_invoice::ui::list::InvoiceList;
use crate::domain::a010_attendance::ui::list::AttendanceList;
use crate::system::users::ui::list::UserList;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d001_monthly_overview" => view! { <MonthlyOverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Fleet
        // ═══════════════════════════════════════════════════════════════════
        "a001_driver" => view! { <DriverList /> }.into_any(),
        "a002_vehicle" => view! { <VehicleList /> }.into_any(),
        "a003_transport" => view! { <TransportList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Maintenance
        // ═══════════════════════════════════════════════════════════════════
        "a004_maintenance" => view! { <MaintenanceList /> }.into_any(),
        "a005_tire_maintenance" => view! { <TireMaintenanceList /> }.into_any(),
        "a006_fuel" => view! { <FuelList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Finance / HR
        // ═══════════════════════════════════════════════════════════════════
        "a007_advance" => view! { <AdvanceList /> }.into_any(),
        "a008_payment" => view! { <PaymentList /> }.into_any(),
        "a009_invoice" => view! { <InvoiceList /> }.into_any(),
        "a010_attendance" => view! { <AttendanceList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // System
        // ═══════════════════════════════════════════════════════════════════
        "sys_users" => view! { <UserList /> }.into_any(),

        _ => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Not found"</div> }.into_any()
        }
    }
}
