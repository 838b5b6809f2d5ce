//! Wire types for the Biblio API.
//!
//! The client owns its own models so it can be used without the server
//! crates; the JSON shapes match the server's exactly.

use serde::{Deserialize, Serialize};

/// A book as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(default)]
    pub available: bool,
}

/// A user as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// Payload for registering a book. The server decides availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBook {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
}

/// Payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub id: String,
    pub name: String,
}

/// Borrow/return payload; camelCase keys on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRequest {
    pub user_id: String,
    pub book_id: String,
}

/// Confirmation payload from mutating endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_request_serializes_camel_case() {
        let req = LoanRequest {
            user_id: "u1".to_string(),
            book_id: "b1".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["bookId"], "b1");
    }

    #[test]
    fn new_book_omits_missing_isbn() {
        let book = NewBook {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("isbn").is_none());
    }

    #[test]
    fn book_tolerates_missing_optional_fields() {
        let book: Book =
            serde_json::from_str(r#"{"id":"b1","title":"Dune","author":"Herbert"}"#).unwrap();
        assert_eq!(book.isbn, None);
        assert!(!book.available);
    }
}
