use serde::{Deserialize, Serialize};

pub use biblio_store::Book;

/// Request model for registering a book. Availability is not accepted from
/// the caller; the store forces it to `true`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBook {
    /// Unique identifier for the book
    pub id: String,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Optional ISBN
    #[serde(default)]
    pub isbn: Option<String>,
}

/// Query parameters for `GET /search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Query parameters for deletion by id.
#[derive(Debug, Clone, Deserialize)]
pub struct IdParams {
    #[serde(default)]
    pub id: Option<String>,
}
