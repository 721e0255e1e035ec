use sea_orm::DatabaseConnection;

use crate::config::AdminSeed;
use crate::error::{AppError, AppResult};
use crate::models::{UserCreate, DEFAULT_ROLE};
use crate::repositories::UserRepository;

/// Create the default admin account unless its email is already taken.
///
/// Returns `true` when a new account was inserted.
pub async fn seed_admin(db: &DatabaseConnection, seed: &AdminSeed) -> AppResult<bool> {
    if UserRepository::get_user_by_email(db, &seed.email)
        .await?
        .is_some()
    {
        tracing::debug!(email = %seed.email, "admin account already present");
        return Ok(false);
    }

    let input = UserCreate {
        name: seed.name.clone(),
        email: seed.email.clone(),
        password: seed.password.clone(),
        role: Some(DEFAULT_ROLE.to_string()),
    };

    match UserRepository::create_user(db, &input).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, email = %user.email, "seeded admin account");
            Ok(true)
        }
        // Another instance seeded it between the lookup and the insert
        Err(AppError::Conflict(_)) => Ok(false),
        Err(e) => Err(e),
    }
}
