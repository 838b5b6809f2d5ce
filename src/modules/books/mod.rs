pub mod models;

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use biblio_http::error::{AppError, AppResult};
use biblio_kernel::{InitCtx, Module};
use biblio_store::{Book, SharedLibrary};

use crate::utils;
use models::{CreateBook, IdParams, SearchParams};

/// Books module: listing, search, registration, and deletion.
pub struct BooksModule {
    library: SharedLibrary,
}

impl BooksModule {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Module for BooksModule {
    fn name(&self) -> &'static str {
        "books"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "books module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/",
                get(list_books).post(create_book).delete(delete_book),
            )
            .route("/search", get(search_books))
            .route("/health", get(health_check))
            .with_state(self.library.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List books",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "All books in id order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Register a book",
                        "tags": ["Books"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/CreateBook" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Created book",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Book" }
                                    }
                                }
                            },
                            "422": {
                                "description": "Missing fields",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book by id",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "id", "in": "query", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": { "description": "Deletion confirmation" },
                            "404": {
                                "description": "Book not found",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            },
                            "409": {
                                "description": "Book currently loaned",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/search": {
                    "get": {
                        "summary": "Search books by title or author",
                        "tags": ["Books"],
                        "parameters": [
                            { "name": "q", "in": "query", "required": false, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": {
                                "description": "Matching books; empty query returns all",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/Book" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Books health check",
                        "tags": ["Books"],
                        "responses": {
                            "200": {
                                "description": "OK",
                                "content": {
                                    "text/plain": { "schema": { "type": "string" } }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique identifier for the book" },
                            "title": { "type": "string", "description": "Title of the book" },
                            "author": { "type": "string", "description": "Author of the book" },
                            "isbn": { "type": "string", "description": "Optional ISBN" },
                            "available": { "type": "boolean", "description": "Whether the book has no open loan" }
                        },
                        "required": ["id", "title", "author", "available"]
                    },
                    "CreateBook": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "title": { "type": "string" },
                            "author": { "type": "string" },
                            "isbn": { "type": "string" }
                        },
                        "required": ["id", "title", "author"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "books module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "books module is healthy"
}

async fn list_books(State(library): State<SharedLibrary>) -> Json<Vec<Book>> {
    Json(library.read().await.list_books())
}

async fn search_books(
    State(library): State<SharedLibrary>,
    Query(params): Query<SearchParams>,
) -> Json<Vec<Book>> {
    let q = params.q.unwrap_or_default();
    Json(library.read().await.search_books(&q))
}

async fn create_book(
    State(library): State<SharedLibrary>,
    Json(input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    if input.id.is_empty() || input.title.is_empty() || input.author.is_empty() {
        return Err(AppError::validation("missing fields"));
    }

    let book = Book {
        id: input.id,
        title: input.title,
        author: input.author,
        isbn: input.isbn.filter(|isbn| !isbn.is_empty()),
        available: true,
    };
    let created = library.write().await.add_book(book);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_book(
    State(library): State<SharedLibrary>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<serde_json::Value>> {
    let id = params.id.unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::validation("missing id"));
    }

    library.write().await.remove_book(&id)?;
    Ok(Json(utils::status_payload("deleted")))
}

/// Create a new instance of the books module.
pub fn create_module(library: SharedLibrary) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(BooksModule::new(library))
}
