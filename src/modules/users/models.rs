use serde::{Deserialize, Serialize};

pub use biblio_store::User;

/// Request model for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Unique identifier for the user
    pub id: String,
    /// Display name
    pub name: String,
}
