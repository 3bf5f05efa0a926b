use contracts::system::auth::UserInfo;
use leptos::prelude::*;

/// Signed-in user as the UI sees it. Seeded from the stored session and
/// set again after a successful login.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<UserInfo>>,
}

impl AuthContext {
    pub fn new(user: Option<UserInfo>) -> Self {
        Self {
            user: RwSignal::new(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn is_admin(&self) -> bool {
        self.user
            .with(|u| u.as_ref().map(UserInfo::is_admin).unwrap_or(false))
    }

    pub fn display_name(&self) -> String {
        self.user.with(|u| {
            u.as_ref()
                .map(|u| u.display_name().to_string())
                .unwrap_or_else(|| "Guest".to_string())
        })
    }
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
