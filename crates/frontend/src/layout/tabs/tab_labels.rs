//! Tab labels: one place for the titles of every tab key.
//!
//! Resource lists take `list_name` from their record type.

use contracts::domain::a001_driver::aggregate::Driver;
use contracts::domain::a002_vehicle::aggregate::Vehicle;
use contracts::domain::a003_transport::aggregate::Transport;
use contracts::domain::a004_maintenance::aggregate::Maintenance;
use contracts::domain::a005_tire_maintenance::aggregate::TireMaintenance;
use contracts::domain::a006_fuel::aggregate::FuelRecord;
use contracts::domain::a007_advance::aggregate::Advance;
use contracts::domain::a008_payment::aggregate::Payment;
use contracts::domain::a009_invoice::aggregate::Invoice;
use contracts::domain::a010_attendance::aggregate::Attendance;
use contracts::domain::common::Resource;
use contracts::system::users::User;

/// Readable tab title for a key. Fallback: the key itself.
pub fn tab_label_for_key(key: &str) -> &str {
    match key {
        // ── Dashboards ───────────────────────────────────────────────────
        "d001_monthly_overview" => "Monthly overview",

        // ── Resources ────────────────────────────────────────────────────
        "a001_driver" => Driver::list_name(),
        "a002_vehicle" => Vehicle::list_name(),
        "a003_transport" => Transport::list_name(),
        "a004_maintenance" => Maintenance::list_name(),
        "a005_tire_maintenance" => TireMaintenance::list_name(),
        "a006_fuel" => FuelRecord::list_name(),
        "a007_advance" => Advance::list_name(),
        "a008_payment" => Payment::list_name(),
        "a009_invoice" => Invoice::list_name(),
        "a010_attendance" => Attendance::list_name(),

        // ── System ───────────────────────────────────────────────────────
        "sys_users" => User::list_name(),

        _ => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(tab_label_for_key("d001_monthly_overview"), "Monthly overview");
        assert_eq!(tab_label_for_key("sys_users"), "Users");
        assert_eq!(tab_label_for_key("nope"), "nope");
    }
}
