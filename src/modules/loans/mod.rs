use async_trait::async_trait;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use biblio_http::error::{AppError, AppResult};
use biblio_kernel::{InitCtx, Module};
use biblio_store::{LoanRequest, SharedLibrary};

use crate::utils;

/// Loans module: borrow and return.
///
/// Loans are not listable; the store keys them by book id, so one open loan
/// per book is guaranteed by construction.
pub struct LoansModule {
    library: SharedLibrary,
}

impl LoansModule {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Module for LoansModule {
    fn name(&self) -> &'static str {
        "loans"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "loans module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route("/borrow", post(borrow))
            .route("/return", post(return_book))
            .route("/health", get(health_check))
            .with_state(self.library.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/borrow": {
                    "post": {
                        "summary": "Borrow a book for a user",
                        "tags": ["Loans"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/LoanRequest" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Borrow confirmation" },
                            "404": {
                                "description": "User or book not found",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            },
                            "409": {
                                "description": "Book not available",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/return": {
                    "post": {
                        "summary": "Return a borrowed book",
                        "tags": ["Loans"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/LoanRequest" }
                                }
                            }
                        },
                        "responses": {
                            "200": { "description": "Return confirmation" },
                            "404": {
                                "description": "Loan not found",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            },
                            "409": {
                                "description": "Loan belongs to a different user",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/health": {
                    "get": {
                        "summary": "Loans health check",
                        "tags": ["Loans"],
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
                    "LoanRequest": {
                        "type": "object",
                        "properties": {
                            "userId": { "type": "string", "description": "Borrowing user id" },
                            "bookId": { "type": "string", "description": "Borrowed book id" }
                        },
                        "required": ["userId", "bookId"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "loans module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "loans module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "loans module is healthy"
}

async fn borrow(
    State(library): State<SharedLibrary>,
    Json(req): Json<LoanRequest>,
) -> AppResult<Json<serde_json::Value>> {
    validate(&req)?;
    library.write().await.borrow(req)?;
    Ok(Json(utils::status_payload("borrowed")))
}

async fn return_book(
    State(library): State<SharedLibrary>,
    Json(req): Json<LoanRequest>,
) -> AppResult<Json<serde_json::Value>> {
    validate(&req)?;
    library.write().await.return_book(req)?;
    Ok(Json(utils::status_payload("returned")))
}

fn validate(req: &LoanRequest) -> Result<(), AppError> {
    if req.user_id.is_empty() || req.book_id.is_empty() {
        return Err(AppError::validation("missing fields"));
    }
    Ok(())
}

/// Create a new instance of the loans module.
pub fn create_module(library: SharedLibrary) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(LoansModule::new(library))
}
