pub mod models;
pub mod repository;
pub mod routes;

use async_trait::async_trait;
use axum::{routing::post, Router};
use pawhaven_kernel::{AppState, Migration, Module};
use serde_json::json;

/// Adoption inquiries submitted from the pet detail page
pub struct AdoptionsModule;

impl AdoptionsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for AdoptionsModule {
    fn name(&self) -> &'static str {
        "adoptions"
    }

    fn routes(&self, state: AppState) -> Router {
        Router::new()
            .route("/api/adopt", post(routes::submit_inquiry))
            .with_state(state)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        Some(json!({
            "paths": {
                "/api/adopt": {
                    "post": {
                        "summary": "Submit an adoption inquiry",
                        "tags": ["Adoptions"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/AdoptionInquiry" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Inquiry recorded with status Pending",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Created" }
                                    }
                                }
                            },
                            "400": {
                                "description": "Missing required fields",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "AdoptionInquiry": {
                        "type": "object",
                        "properties": {
                            "pet_id": { "type": "integer" },
                            "full_name": { "type": "string" },
                            "email": { "type": "string" },
                            "phone": { "type": "string" },
                            "message": { "type": "string" }
                        },
                        "required": ["pet_id", "full_name", "email"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_adoption_request",
            up: r#"
                CREATE TABLE IF NOT EXISTS adoption_request (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    pet_id INTEGER NOT NULL,
                    full_name TEXT NOT NULL,
                    email TEXT NOT NULL,
                    phone TEXT,
                    message TEXT,
                    status TEXT NOT NULL DEFAULT 'Pending',
                    created_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_adoption_request_pet_id ON adoption_request (pet_id);
                "#,
        }]
    }
}

/// Create a new instance of the adoptions module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(AdoptionsModule::new())
}
