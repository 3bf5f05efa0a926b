//! Fetching the lookup tables a list needs to show names instead of ids.

use contracts::domain::a001_driver::aggregate::Driver;
use contracts::domain::a002_vehicle::aggregate::Vehicle;
use contracts::domain::common::{LookupKind, Lookups, RecordId, Resource};
use contracts::system::users::User;
use futures::future::try_join_all;

use crate::error::ApiError;
use crate::http::client::ApiClient;

async fn load_table(
    api: &ApiClient,
    kind: LookupKind,
) -> Result<(LookupKind, Vec<(RecordId, String)>), ApiError> {
    let path = kind.collection_path();
    let entries = match kind {
        LookupKind::Drivers => api
            .get_json::<Vec<Driver>>(path, None)
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect(),
        LookupKind::Vehicles => api
            .get_json::<Vec<Vehicle>>(path, None)
            .await?
            .into_iter()
            .map(|v| (v.id, v.vehicle_number))
            .collect(),
        LookupKind::Users => {
            let empty = Lookups::new();
            api.get_json::<Vec<User>>(path, None)
                .await?
                .into_iter()
                .map(|u| (u.id, u.display_name(&empty)))
                .collect()
        }
    };
    Ok((kind, entries))
}

/// All tables for `kinds`, fetched concurrently. One failure fails the lot.
pub async fn load_lookups(api: &ApiClient, kinds: &[LookupKind]) -> Result<Lookups, ApiError> {
    let tables = try_join_all(kinds.iter().map(|kind| load_table(api, *kind))).await?;
    let mut lookups = Lookups::new();
    for (kind, entries) in tables {
        lookups.insert(kind, entries);
    }
    Ok(lookups)
}
