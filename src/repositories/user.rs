use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::entity::user::{self, ActiveModel, Column, Entity as UserEntity};
use crate::error::{AppError, AppResult};
use crate::models::{User, UserCreate, UserUpdate};
use crate::repositories::Repository;
use crate::services::PasswordService;

/// User repository for database operations
pub struct UserRepository;

#[async_trait]
impl Repository<User> for UserRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<User> {
        let model = UserEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User".to_string()));
        }

        Ok(())
    }

    async fn list(db: &DatabaseConnection) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }
}

impl UserRepository {
    /// Exact-match lookup by email; absence is not an error
    pub async fn get_user_by_email(db: &DatabaseConnection, email: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await?;

        Ok(model.map(Into::into))
    }

    /// Create a new user, hashing the supplied password.
    ///
    /// The unique index on `email` decides duplicates: a violation surfaces
    /// as [`AppError::Conflict`] even when two requests race.
    pub async fn create_user(db: &DatabaseConnection, input: &UserCreate) -> AppResult<User> {
        let hashed_password = PasswordService::hash_password(&input.password)?;

        let model = ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            email: Set(input.email.clone()),
            hashed_password: Set(hashed_password),
            role: Set(input.role_or_default()),
            created_at: NotSet,
        };

        let result = model.insert(db).await?;

        tracing::debug!(user_id = result.id, "user created");
        Ok(result.into())
    }

    /// Replace name, email and role; re-hash only when a new password is given.
    ///
    /// Lookup and write share one transaction, so a missing id changes nothing.
    pub async fn update_user(
        db: &DatabaseConnection,
        id: i32,
        input: &UserUpdate,
    ) -> AppResult<User> {
        let new_hash = input
            .new_password()
            .map(PasswordService::hash_password)
            .transpose()?;

        let txn = db.begin().await?;

        let model = UserEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        let mut active: ActiveModel = model.into();

        active.name = Set(input.name.clone());
        active.email = Set(input.email.clone());
        if let Some(role) = &input.role {
            active.role = Set(role.clone());
        }
        if let Some(hash) = new_hash {
            active.hashed_password = Set(hash);
        }

        let result = active.update(&txn).await?;
        txn.commit().await?;

        tracing::debug!(user_id = id, "user updated");
        Ok(result.into())
    }

    /// Delete user by id
    pub async fn delete_user(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        <Self as Repository<User>>::delete(db, id).await?;

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }
}

// Conversion from SeaORM model to our domain model
impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            hashed_password: m.hashed_password,
            role: m.role,
            created_at: m.created_at,
        }
    }
}
