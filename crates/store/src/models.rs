use serde::{Deserialize, Serialize};

/// A registered book.
///
/// `id` is caller-supplied and immutable after creation. `available` is
/// owned by the store: forced to `true` on registration and flipped only by
/// borrow/return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for the book
    pub id: String,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Optional ISBN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// Whether the book has no open loan
    #[serde(default)]
    pub available: bool,
}

/// A registered library user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: String,
    /// Display name
    pub name: String,
}

/// Borrow/return payload relating one user to one book.
///
/// Serialized with camelCase keys (`userId`, `bookId`) — the wire format the
/// browser front end sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub user_id: String,
    pub book_id: String,
}
