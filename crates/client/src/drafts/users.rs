use contracts::system::users::{CreateUserDto, UpdateUserDto, User, UserPayload, UserRole};

use crate::form::validate::input_value;
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub username: String,
    pub email: String,
    /// Only asked for on create; accounts set their own later via activation
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub profile_image: Option<String>,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            full_name: String::new(),
            role: UserRole::Staff,
            is_active: true,
            profile_image: None,
        }
    }
}

impl ResourceDraft for UserDraft {
    type Record = User;
    type Payload = UserPayload;

    const LOCKED_ON_EDIT: &'static [&'static str] = &["username"];

    fn from_record(record: &User) -> Self {
        Self {
            username: record.username.clone(),
            email: record.email.clone(),
            password: String::new(),
            full_name: input_value(&record.full_name),
            role: record.role,
            is_active: record.is_active,
            profile_image: record.profile_image.clone(),
        }
    }

    fn validate(&self, mode: FormMode) -> Result<UserPayload, ValidationErrors> {
        let mut v = Validator::new();
        let email = v.email("email", &self.email);
        let full_name = Validator::optional_text(&self.full_name);

        match mode {
            FormMode::Create => {
                let username = v.required_text("username", "Username", &self.username);
                if username.contains(char::is_whitespace) {
                    v.error("username", "Username cannot contain spaces");
                }
                let password = v.password("password", &self.password);
                v.finish(UserPayload::Create(CreateUserDto {
                    username,
                    email,
                    password,
                    full_name,
                    role: self.role,
                    profile_image: self.profile_image.clone(),
                }))
            }
            FormMode::Edit(_) => v.finish(UserPayload::Update(UpdateUserDto {
                email,
                full_name,
                role: self.role,
                is_active: self.is_active,
                profile_image: self.profile_image.clone(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_requires_password() {
        let draft = UserDraft {
            username: "nimal".into(),
            email: "nimal@fleet.lk".into(),
            password: "short".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_edit_sends_update_without_password() {
        let draft = UserDraft {
            username: "nimal".into(),
            email: "nimal@fleet.lk".into(),
            is_active: false,
            ..Default::default()
        };
        match draft.validate(FormMode::Edit(4)).unwrap() {
            UserPayload::Update(dto) => assert!(!dto.is_active),
            other => panic!("unexpected payload {:?}", other),
        }
        let json = serde_json::to_value(draft.validate(FormMode::Edit(4)).unwrap()).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("username").is_none());
    }
}
