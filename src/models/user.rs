use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

/// Role assigned when a create request does not name one
pub const DEFAULT_ROLE: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)] // Never expose password hash
    pub hashed_password: String,
    pub role: String,
    pub created_at: OffsetDateTime,
}

/// Registration / add payload
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserCreate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[validate(length(min = 1, message = "Role must not be empty"))]
    pub role: Option<String>,
}

impl UserCreate {
    pub fn role_or_default(&self) -> String {
        self.role
            .clone()
            .unwrap_or_else(|| DEFAULT_ROLE.to_string())
    }
}

/// Full replacement of the mutable fields; password and role are optional
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserUpdate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: Option<String>,
    #[validate(length(min = 1, message = "Role must not be empty"))]
    pub role: Option<String>,
}

impl UserUpdate {
    /// The password to re-hash, if the caller actually supplied one
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// Public user view (safe to return via API)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserView {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(with = "time::serde::rfc3339::option", default)]
    #[schema(value_type = Option<String>)]
    pub created_at: Option<OffsetDateTime>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            created_at: Some(user.created_at),
        }
    }
}
