use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

use super::{LookupKind, Lookups};

/// Backend primary key type
pub type RecordId = i64;

/// Placeholder rendered for missing optional values
pub const NOT_AVAILABLE: &str = "N/A";

/// Трейт для записи ресурса, которой управляет список
///
/// Определяет метаданные эндпоинта и то, как запись участвует в поиске
/// и отображении. Реализуется каждой записью из `domain::*`.
pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    // ============================================================================
    // Метаданные класса (статические данные)
    // ============================================================================

    /// Path of the collection below the API prefix (e.g. "drivers")
    fn collection_path() -> &'static str;

    /// Singular UI name (e.g. "Driver")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Drivers")
    fn list_name() -> &'static str;

    /// Stem used when naming exported files
    fn export_stem() -> &'static str {
        Self::collection_path()
    }

    /// Related collections needed to resolve display names
    fn lookups() -> &'static [LookupKind] {
        &[]
    }

    // ============================================================================
    // Методы экземпляра
    // ============================================================================

    fn id(&self) -> RecordId;

    /// Human readable name used in confirmations and notifications
    fn display_name(&self, lookups: &Lookups) -> String;

    /// Values the client-side search term is matched against
    fn search_fields(&self, lookups: &Lookups) -> Vec<String>;

    /// Case-insensitive substring match over `search_fields`.
    /// A blank term matches everything.
    fn matches_search(&self, term: &str, lookups: &Lookups) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.search_fields(lookups)
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
    }
}

/// Render an optional value, falling back to "N/A"
pub fn or_na<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_na() {
        assert_eq!(or_na(&Some("0771234567")), "0771234567");
        assert_eq!(or_na::<String>(&None), "N/A");
        assert_eq!(or_na(&Some(2019)), "2019");
    }
}
