use serde::{Deserialize, Serialize};

use crate::domain::common::LookupKind;

/// Who receives an advance or a payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientType {
    Driver,
    User,
}

impl RecipientType {
    /// Value used on the wire and in filter query strings
    pub fn code(&self) -> &'static str {
        match self {
            RecipientType::Driver => "driver",
            RecipientType::User => "user",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RecipientType::Driver => "Driver",
            RecipientType::User => "Staff",
        }
    }

    /// Lookup table holding the recipient's name
    pub fn lookup_kind(&self) -> LookupKind {
        match self {
            RecipientType::Driver => LookupKind::Drivers,
            RecipientType::User => LookupKind::Users,
        }
    }

    pub fn all() -> Vec<RecipientType> {
        vec![RecipientType::Driver, RecipientType::User]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "driver" => Some(RecipientType::Driver),
            "user" => Some(RecipientType::User),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecipientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_and_wire_format() {
        for kind in RecipientType::all() {
            assert_eq!(RecipientType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(
            serde_json::to_string(&RecipientType::Driver).unwrap(),
            "\"driver\""
        );
        assert_eq!(RecipientType::from_code("vendor"), None);
    }
}
