use chrono::{DateTime, Utc};
use lectern_types::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization role carried on a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Authenticated,
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub role: Role,
    /// Display name from the user's metadata.
    #[serde(default)]
    pub name: Option<String>,
}

impl User {
    /// Whether this user may reach the admin area.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// The persisted "logged in user" state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub access_token: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Payload of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub session: Session,
}

/// Payload of a successful sign-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedOut {
    pub success: bool,
}

/// The one credential pair the emulator accepts, and the user it signs in.
#[derive(Clone, PartialEq, Eq)]
pub struct DemoIdentity {
    pub email: String,
    pub password: String,
    pub user: User,
}

impl DemoIdentity {
    pub(crate) fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}

impl Default for DemoIdentity {
    fn default() -> Self {
        let email = "admin@example.com".to_string();
        Self {
            password: "password123".to_string(),
            user: User {
                id: UserId::new("mock-user-id"),
                email: email.clone(),
                role: Role::Admin,
                name: Some("Admin User".to_string()),
            },
            email,
        }
    }
}

impl fmt::Debug for DemoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoIdentity")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}
