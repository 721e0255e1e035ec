pub mod extract;
pub mod health;
pub mod user;

pub use extract::ValidatedJson;
pub use health::{health, root, HealthResponse, MessageResponse};
pub use user::{delete_user, list_users, register_user, update_user, DeleteResponse};
