use serde::{Deserialize, Serialize};

use crate::domain::common::{Lookups, RecordId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::Manager => "Manager",
            UserRole::Staff => "Staff",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![UserRole::Admin, UserRole::Manager, UserRole::Staff]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Учётная запись пользователя системы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub profile_image: Option<String>,
}

impl Resource for User {
    fn collection_path() -> &'static str {
        "users"
    }

    fn element_name() -> &'static str {
        "User"
    }

    fn list_name() -> &'static str {
        "Users"
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, _lookups: &Lookups) -> String {
        self.full_name.clone().unwrap_or_else(|| self.username.clone())
    }

    fn search_fields(&self, _lookups: &Lookups) -> Vec<String> {
        let mut fields = vec![self.username.clone(), self.email.clone()];
        fields.extend(self.full_name.clone());
        fields
    }
}

/// Body of POST `users`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub profile_image: Option<String>,
}

/// Body of PUT `users/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub email: String,
    pub full_name: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub profile_image: Option<String>,
}

/// Create and update send different bodies for users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserPayload {
    Create(CreateUserDto),
    Update(UpdateUserDto),
}
