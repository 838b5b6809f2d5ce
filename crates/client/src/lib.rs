//! Typed client for the Biblio HTTP API.
//!
//! Thin wrappers over three generic round trips (`get`, `post`, `del`):
//! every call is a fresh request — no retry, no timeout beyond reqwest's
//! defaults, no caching. Non-2xx responses surface as [`ApiError::Http`]
//! carrying the raw response body as the message.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Book, LoanRequest, NewBook, NewUser, StatusResponse, User};
