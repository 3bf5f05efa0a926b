//! Monthly fleet overview: trips, fuel, maintenance and payroll for one
//! "YYYY-MM" period, computed on the client from the raw lists.

use serde::{Deserialize, Serialize};

use crate::domain::a003_transport::aggregate::Transport;
use crate::domain::a004_maintenance::aggregate::Maintenance;
use crate::domain::a005_tire_maintenance::aggregate::TireMaintenance;
use crate::domain::a006_fuel::aggregate::FuelRecord;
use crate::domain::a007_advance::aggregate::Advance;
use crate::domain::a008_payment::aggregate::Payment;
use crate::shared::finance::{sum_by, unit_price};
use crate::shared::period::month_of;

/// Raw lists the overview is computed from
#[derive(Debug, Clone, Default)]
pub struct MonthlyOverviewInput {
    pub transports: Vec<Transport>,
    pub fuel: Vec<FuelRecord>,
    pub maintenance: Vec<Maintenance>,
    pub tire_maintenance: Vec<TireMaintenance>,
    pub advances: Vec<Advance>,
    pub payments: Vec<Payment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOverview {
    /// Period in format "YYYY-MM"
    pub month: String,
    pub trip_count: usize,
    pub total_income: f64,
    pub total_distance_km: f64,
    pub fuel_litres: f64,
    pub fuel_cost: f64,
    /// Volume-weighted price per litre, 0 when no fuel was bought
    pub average_fuel_price: f64,
    /// Regular plus tire maintenance
    pub maintenance_cost: f64,
    pub advances_total: f64,
    pub net_payroll: f64,
    /// income - fuel - maintenance - net payroll
    pub operating_balance: f64,
}

impl MonthlyOverview {
    /// Records dated outside `month` are ignored, so the input may be
    /// unfiltered.
    pub fn compute(month: &str, input: &MonthlyOverviewInput) -> Self {
        let transports: Vec<&Transport> = input
            .transports
            .iter()
            .filter(|t| t.month() == month)
            .collect();
        let fuel: Vec<&FuelRecord> = input
            .fuel
            .iter()
            .filter(|f| month_of(f.date) == month)
            .collect();
        let maintenance: Vec<&Maintenance> = input
            .maintenance
            .iter()
            .filter(|m| month_of(m.date) == month)
            .collect();
        let tires: Vec<&TireMaintenance> = input
            .tire_maintenance
            .iter()
            .filter(|m| month_of(m.date) == month)
            .collect();
        let advances: Vec<&Advance> = input.advances.iter().filter(|a| a.month == month).collect();
        let payments: Vec<&Payment> = input.payments.iter().filter(|p| p.month == month).collect();

        let total_income = sum_by(&transports, |t| t.income);
        let fuel_litres = sum_by(&fuel, |f| f.quantity);
        let fuel_cost = sum_by(&fuel, |f| f.cost);
        let maintenance_cost = sum_by(&maintenance, |m| m.cost) + sum_by(&tires, |m| m.cost);
        let net_payroll = sum_by(&payments, |p| p.net_pay());

        Self {
            month: month.to_string(),
            trip_count: transports.len(),
            total_income,
            total_distance_km: sum_by(&transports, |t| t.distance_km.unwrap_or(0.0)),
            fuel_litres,
            fuel_cost,
            average_fuel_price: unit_price(fuel_cost, fuel_litres),
            maintenance_cost,
            advances_total: sum_by(&advances, |a| a.amount),
            net_payroll,
            operating_balance: total_income - fuel_cost - maintenance_cost - net_payroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RecipientType;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn trip(id: i64, day: NaiveDate, income: f64, distance: Option<f64>) -> Transport {
        Transport {
            id,
            vehicle_id: 1,
            driver_id: 1,
            origin: "Colombo".into(),
            destination: "Galle".into(),
            departure_time: day.and_hms_opt(6, 0, 0).unwrap(),
            arrival_time: None,
            distance_km: distance,
            income,
            description: None,
        }
    }

    fn fuel(id: i64, day: NaiveDate, quantity: f64, cost: f64) -> FuelRecord {
        FuelRecord {
            id,
            vehicle_id: 1,
            date: day,
            quantity,
            cost,
            odometer: None,
            station: None,
        }
    }

    #[test]
    fn test_compute_ignores_other_months() {
        let input = MonthlyOverviewInput {
            transports: vec![
                trip(1, date(2024, 5, 2), 18000.0, Some(120.0)),
                trip(2, date(2024, 5, 20), 22000.0, None),
                trip(3, date(2024, 4, 30), 99999.0, Some(10.0)),
            ],
            fuel: vec![
                fuel(1, date(2024, 5, 3), 40.0, 14000.0),
                fuel(2, date(2024, 5, 9), 10.0, 3500.0),
                fuel(3, date(2024, 6, 1), 10.0, 1.0),
            ],
            maintenance: vec![Maintenance {
                id: 1,
                vehicle_id: 1,
                date: date(2024, 5, 15),
                description: "Oil change".into(),
                cost: 4500.0,
                service_provider: None,
                odometer: None,
            }],
            tire_maintenance: vec![],
            advances: vec![Advance {
                id: 1,
                recipient_type: RecipientType::Driver,
                recipient_id: 1,
                amount: 3000.0,
                date: date(2024, 5, 10),
                month: "2024-05".into(),
                reason: None,
            }],
            payments: vec![Payment {
                id: 1,
                recipient_type: RecipientType::Driver,
                recipient_id: 1,
                month: "2024-05".into(),
                base_amount: 50000.0,
                deductions: 2000.0,
                advances_deducted: 3000.0,
                paid_date: None,
                status: None,
                notes: None,
            }],
        };

        let overview = MonthlyOverview::compute("2024-05", &input);
        assert_eq!(overview.trip_count, 2);
        assert_eq!(overview.total_income, 40000.0);
        assert_eq!(overview.total_distance_km, 120.0);
        assert_eq!(overview.fuel_litres, 50.0);
        assert_eq!(overview.fuel_cost, 17500.0);
        assert_eq!(overview.average_fuel_price, 350.0);
        assert_eq!(overview.maintenance_cost, 4500.0);
        assert_eq!(overview.advances_total, 3000.0);
        assert_eq!(overview.net_payroll, 45000.0);
        assert_eq!(overview.operating_balance, 40000.0 - 17500.0 - 4500.0 - 45000.0);
    }

    #[test]
    fn test_empty_month() {
        let overview = MonthlyOverview::compute("2024-01", &MonthlyOverviewInput::default());
        assert_eq!(overview.trip_count, 0);
        assert_eq!(overview.average_fuel_price, 0.0);
        assert_eq!(overview.operating_balance, 0.0);
    }
}
