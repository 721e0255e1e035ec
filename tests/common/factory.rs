use uuid::Uuid;

use krok_users::models::{User, UserCreate};
use krok_users::repositories::UserRepository;
use krok_users::state::AppState;

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// A unique, syntactically valid email
pub fn unique_email() -> String {
    format!("test-{}@example.com", Uuid::new_v4())
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Create a test user with a fresh email
    pub async fn create_user(&self) -> User {
        self.create_user_with_email(&unique_email()).await
    }

    /// Create a test user with specific email
    pub async fn create_user_with_email(&self, email: &str) -> User {
        let input = UserCreate {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: TEST_PASSWORD.to_string(),
            role: None,
        };

        UserRepository::create_user(&self.state.db, &input)
            .await
            .unwrap()
    }
}
