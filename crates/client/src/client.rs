//! The API client: generic verbs plus one typed wrapper per operation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::types::{Book, LoanRequest, NewBook, NewUser, StatusResponse, User};

/// Client for the Biblio HTTP API.
///
/// Holds the base URL (including the `/api` prefix) and a connection pool;
/// carries no other state between calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Issue a GET against `base + path` and decode the JSON response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        decode(response).await
    }

    /// POST a JSON-encoded body against `base + path`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(response).await
    }

    /// Issue a DELETE against `base + path`.
    pub async fn del<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.delete(self.url(path)).send().await?;
        decode(response).await
    }

    // Typed operations.

    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.get("/books").await
    }

    /// Search books by title or author; the query value is percent-encoded.
    pub async fn search_books(&self, query: &str) -> Result<Vec<Book>, ApiError> {
        let response = self
            .http
            .get(self.url("/books/search"))
            .query(&[("q", query)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn create_book(&self, book: &NewBook) -> Result<Book, ApiError> {
        if book.id.is_empty() || book.title.is_empty() || book.author.is_empty() {
            return Err(ApiError::InvalidInput(
                "id, title, and author are required".to_string(),
            ));
        }
        self.post("/books", book).await
    }

    pub async fn delete_book(&self, id: &str) -> Result<StatusResponse, ApiError> {
        let response = self
            .http
            .delete(self.url("/books"))
            .query(&[("id", id)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ApiError> {
        if user.id.is_empty() || user.name.is_empty() {
            return Err(ApiError::InvalidInput("id and name are required".to_string()));
        }
        self.post("/users", user).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<StatusResponse, ApiError> {
        let response = self
            .http
            .delete(self.url("/users"))
            .query(&[("id", id)])
            .send()
            .await?;
        decode(response).await
    }

    pub async fn borrow(&self, user_id: &str, book_id: &str) -> Result<StatusResponse, ApiError> {
        self.post("/loans/borrow", &loan(user_id, book_id)?).await
    }

    pub async fn return_book(
        &self,
        user_id: &str,
        book_id: &str,
    ) -> Result<StatusResponse, ApiError> {
        self.post("/loans/return", &loan(user_id, book_id)?).await
    }
}

fn loan(user_id: &str, book_id: &str) -> Result<LoanRequest, ApiError> {
    if user_id.is_empty() || book_id.is_empty() {
        return Err(ApiError::InvalidInput(
            "user id and book id are required".to_string(),
        ));
    }
    Ok(LoanRequest {
        user_id: user_id.to_string(),
        book_id: book_id.to_string(),
    })
}

/// Map the response to a decoded value or an `ApiError` carrying the raw
/// body text.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            body,
        });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/books"), "http://localhost:8080/api/books");
    }

    #[tokio::test]
    async fn create_book_rejects_missing_fields_locally() {
        let client = ApiClient::new("http://localhost:0/api");
        let book = NewBook {
            id: String::new(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: None,
        };
        let err = client.create_book(&book).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn borrow_rejects_empty_ids_locally() {
        let client = ApiClient::new("http://localhost:0/api");
        let err = client.borrow("", "b1").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
