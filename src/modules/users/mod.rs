pub mod models;

use async_trait::async_trait;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use biblio_http::error::{AppError, AppResult};
use biblio_kernel::{InitCtx, Module};
use biblio_store::{SharedLibrary, User};

use crate::modules::books::models::IdParams;
use crate::utils;
use models::CreateUser;

/// Users module: listing, registration, and deletion.
pub struct UsersModule {
    library: SharedLibrary,
}

impl UsersModule {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }
}

#[async_trait]
impl Module for UsersModule {
    fn name(&self) -> &'static str {
        "users"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "users module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        Router::new()
            .route(
                "/",
                get(list_users).post(create_user).delete(delete_user),
            )
            .route("/health", get(health_check))
            .with_state(self.library.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "List users",
                        "tags": ["Users"],
                        "responses": {
                            "200": {
                                "description": "All users in id order",
                                "content": {
                                    "application/json": {
                                        "schema": {
                                            "type": "array",
                                            "items": { "$ref": "#/components/schemas/User" }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    "post": {
                        "summary": "Register a user",
                        "tags": ["Users"],
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/CreateUser" }
                                }
                            }
                        },
                        "responses": {
                            "201": {
                                "description": "Created user",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/User" }
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
                        "summary": "Delete a user by id",
                        "tags": ["Users"],
                        "parameters": [
                            { "name": "id", "in": "query", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": { "description": "Deletion confirmation" },
                            "404": {
                                "description": "User not found",
                                "content": {
                                    "text/plain": {
                                        "schema": { "$ref": "#/components/schemas/ErrorText" }
                                    }
                                }
                            },
                            "409": {
                                "description": "User has active loans",
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
                        "summary": "Users health check",
                        "tags": ["Users"],
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
                    "User": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string", "description": "Unique identifier for the user" },
                            "name": { "type": "string", "description": "Display name" }
                        },
                        "required": ["id", "name"]
                    },
                    "CreateUser": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "string" },
                            "name": { "type": "string" }
                        },
                        "required": ["id", "name"]
                    }
                }
            }
        }))
    }

    async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "users module started");
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(module = self.name(), "users module stopped");
        Ok(())
    }
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "users module is healthy"
}

async fn list_users(State(library): State<SharedLibrary>) -> Json<Vec<User>> {
    Json(library.read().await.list_users())
}

async fn create_user(
    State(library): State<SharedLibrary>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    if input.id.is_empty() || input.name.is_empty() {
        return Err(AppError::validation("missing fields"));
    }

    let user = User {
        id: input.id,
        name: input.name,
    };
    let created = library.write().await.add_user(user);
    Ok((StatusCode::CREATED, Json(created)))
}

async fn delete_user(
    State(library): State<SharedLibrary>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<serde_json::Value>> {
    let id = params.id.unwrap_or_default();
    if id.is_empty() {
        return Err(AppError::validation("missing id"));
    }

    library.write().await.remove_user(&id)?;
    Ok(Json(utils::status_payload("deleted")))
}

/// Create a new instance of the users module.
pub fn create_module(library: SharedLibrary) -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(UsersModule::new(library))
}
