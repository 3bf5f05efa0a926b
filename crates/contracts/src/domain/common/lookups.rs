use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::RecordId;

/// Collections fetched alongside a list to turn ids into names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookupKind {
    Drivers,
    Users,
    Vehicles,
}

impl LookupKind {
    /// Collection path of the lookup source
    pub fn collection_path(&self) -> &'static str {
        match self {
            LookupKind::Drivers => "drivers",
            LookupKind::Users => "users",
            LookupKind::Vehicles => "vehicles",
        }
    }
}

/// id → display name tables, one per lookup kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lookups {
    tables: HashMap<LookupKind, HashMap<RecordId, String>>,
}

impl Lookups {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table for `kind`
    pub fn insert<I>(&mut self, kind: LookupKind, entries: I)
    where
        I: IntoIterator<Item = (RecordId, String)>,
    {
        self.tables.insert(kind, entries.into_iter().collect());
    }

    pub fn name(&self, kind: LookupKind, id: RecordId) -> Option<&str> {
        self.tables
            .get(&kind)
            .and_then(|table| table.get(&id))
            .map(String::as_str)
    }

    /// Name for `id`, or `#<id>` when the lookup table does not know it
    pub fn name_or_id(&self, kind: LookupKind, id: RecordId) -> String {
        self.name(kind, id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", id))
    }

    /// Sorted (id, name) pairs, for select inputs
    pub fn options(&self, kind: LookupKind) -> Vec<(RecordId, String)> {
        let mut options: Vec<(RecordId, String)> = self
            .tables
            .get(&kind)
            .map(|table| table.iter().map(|(id, name)| (*id, name.clone())).collect())
            .unwrap_or_default();
        options.sort_by(|a, b| a.1.to_lowercase().cmp(&b.1.to_lowercase()));
        options
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_resolution() {
        let mut lookups = Lookups::new();
        lookups.insert(
            LookupKind::Drivers,
            vec![(1, "J. Silva".to_string()), (2, "A. Perera".to_string())],
        );

        assert_eq!(lookups.name(LookupKind::Drivers, 1), Some("J. Silva"));
        assert_eq!(lookups.name(LookupKind::Users, 1), None);
        assert_eq!(lookups.name_or_id(LookupKind::Drivers, 9), "#9");
    }

    #[test]
    fn test_options_sorted_by_name() {
        let mut lookups = Lookups::new();
        lookups.insert(
            LookupKind::Vehicles,
            vec![(5, "WP-KA-9090".to_string()), (3, "CP-LB-1111".to_string())],
        );

        let options = lookups.options(LookupKind::Vehicles);
        assert_eq!(options[0], (3, "CP-LB-1111".to_string()));
        assert_eq!(options[1], (5, "WP-KA-9090".to_string()));
        assert!(lookups.options(LookupKind::Users).is_empty());
    }
}
