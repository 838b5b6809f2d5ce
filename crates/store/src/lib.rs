//! Domain model and in-memory store for the Biblio library service.
//!
//! The store is a plain synchronous struct; the HTTP layer shares it across
//! handlers through the [`SharedLibrary`] alias.

pub mod library;
pub mod models;

use std::sync::Arc;

use tokio::sync::RwLock;

pub use library::{Library, LibraryError};
pub use models::{Book, LoanRequest, User};

/// Library handle shared between modules and handlers.
pub type SharedLibrary = Arc<RwLock<Library>>;

/// Create an empty library behind a shared handle.
pub fn shared() -> SharedLibrary {
    Arc::new(RwLock::new(Library::new()))
}
