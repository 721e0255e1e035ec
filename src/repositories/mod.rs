pub mod user;

pub use user::UserRepository;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::error::AppResult;

/// Base repository trait for common CRUD operations
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<T>;

    /// Delete entity by ID
    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()>;

    /// List every entity, oldest first
    async fn list(db: &DatabaseConnection) -> AppResult<Vec<T>>;
}
