use contracts::dashboards::d001_monthly_overview::{MonthlyOverview, MonthlyOverviewInput};
use contracts::domain::a003_transport::aggregate::Transport;
use contracts::domain::a004_maintenance::aggregate::Maintenance;
use contracts::domain::a005_tire_maintenance::aggregate::TireMaintenance;
use contracts::domain::a006_fuel::aggregate::FuelRecord;
use contracts::domain::a007_advance::aggregate::Advance;
use contracts::domain::a008_payment::aggregate::Payment;
use contracts::domain::common::Resource;
use contracts::shared::list_filter::{keys, ListFilter};
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::client::ApiClient;

async fn fetch<R: Resource + DeserializeOwned>(
    api: &ApiClient,
    filter: &ListFilter,
) -> Result<Vec<R>, ApiError> {
    api.get_json(R::collection_path(), Some(filter)).await
}

/// Fetch the six source lists for `month` in parallel and summarise them.
/// Any failed list fails the whole overview.
pub async fn load_monthly_overview(
    api: &ApiClient,
    month: &str,
) -> Result<MonthlyOverview, ApiError> {
    let filter = ListFilter::new().with(keys::MONTH, month);
    let (transports, fuel, maintenance, tire_maintenance, advances, payments) = futures::try_join!(
        fetch::<Transport>(api, &filter),
        fetch::<FuelRecord>(api, &filter),
        fetch::<Maintenance>(api, &filter),
        fetch::<TireMaintenance>(api, &filter),
        fetch::<Advance>(api, &filter),
        fetch::<Payment>(api, &filter),
    )?;
    log::debug!(
        "overview {}: {} trips, {} fuel records, {} payments",
        month,
        transports.len(),
        fuel.len(),
        payments.len()
    );

    let input = MonthlyOverviewInput {
        transports,
        fuel,
        maintenance,
        tire_maintenance,
        advances,
        payments,
    };
    Ok(MonthlyOverview::compute(month, &input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::testing::Harness;

    #[tokio::test]
    async fn test_overview_from_six_lists() {
        let h = Harness::new(true);
        h.transport.on_json(
            HttpMethod::Get,
            "transports",
            200,
            r#"[{"id":1,"vehicleId":1,"driverId":1,"origin":"Colombo","destination":"Galle",
                 "departureTime":"2024-05-02T06:00:00","income":30000,"distanceKm":120}]"#,
        );
        h.transport.on_json(
            HttpMethod::Get,
            "fuel",
            200,
            r#"[{"id":1,"vehicleId":1,"date":"2024-05-02","quantity":10,"cost":3500}]"#,
        );
        h.transport.on_json(
            HttpMethod::Get,
            "maintenance",
            200,
            r#"[{"id":1,"vehicleId":1,"date":"2024-05-09","description":"Oil","cost":2000}]"#,
        );
        h.transport.on_json(HttpMethod::Get, "tire-maintenance", 200, "[]");
        h.transport.on_json(HttpMethod::Get, "advances", 200, "[]");
        h.transport.on_json(
            HttpMethod::Get,
            "payments",
            200,
            r#"[{"id":1,"recipientType":"driver","recipientId":1,"month":"2024-05",
                 "baseAmount":20000,"deductions":0,"advancesDeducted":0}]"#,
        );

        let overview = load_monthly_overview(&h.services.api, "2024-05").await.unwrap();

        assert_eq!(overview.trip_count, 1);
        assert_eq!(overview.fuel_cost, 3500.0);
        assert_eq!(overview.average_fuel_price, 350.0);
        assert_eq!(overview.operating_balance, 30000.0 - 3500.0 - 2000.0 - 20000.0);
        assert!(h
            .transport
            .requests()
            .iter()
            .all(|r| r.url.ends_with("?month=2024-05")));
    }

    #[tokio::test]
    async fn test_one_failing_list_fails_overview() {
        let h = Harness::new(true);
        for path in ["transports", "fuel", "maintenance", "tire-maintenance", "advances"] {
            h.transport.on_json(HttpMethod::Get, path, 200, "[]");
        }
        h.transport.on_json(HttpMethod::Get, "payments", 500, "");

        let result = load_monthly_overview(&h.services.api, "2024-05").await;
        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }
}
