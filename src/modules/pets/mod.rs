pub mod models;
pub mod query;
pub mod repository;
pub mod routes;
pub mod seed;

use async_trait::async_trait;
use axum::{
    routing::{get, post},
    Router,
};
use pawhaven_kernel::{AppState, InitCtx, Migration, Module};
use serde_json::json;

use repository::PetRepository;

/// Pet listings: schema, search, detail, and the admin add endpoint
pub struct PetsModule;

impl PetsModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for PetsModule {
    fn name(&self) -> &'static str {
        "pets"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            default_per_page = ctx.settings.listing.default_per_page,
            "pets module initialized"
        );
        Ok(())
    }

    fn routes(&self, state: AppState) -> Router {
        Router::new()
            .route("/api/pets", get(routes::list_pets))
            .route("/api/pets/{id}", get(routes::get_pet))
            .route("/api/admin/pets", post(routes::create_pet))
            .with_state(state)
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let filter_param = |name: &str, description: &str| {
            json!({
                "name": name,
                "in": "query",
                "required": false,
                "description": description,
                "schema": { "type": "string" }
            })
        };

        Some(json!({
            "paths": {
                "/api/pets": {
                    "get": {
                        "summary": "Search pets",
                        "tags": ["Pets"],
                        "parameters": [
                            filter_param("q", "Case-insensitive match on name, breed, description, city or state"),
                            filter_param("species", "Exact species"),
                            filter_param("age", "Exact age category"),
                            filter_param("size", "Exact size category"),
                            filter_param("gender", "Exact gender"),
                            filter_param("city", "Case-insensitive substring"),
                            filter_param("state", "Case-insensitive substring"),
                            filter_param("kids", "Only pets good with kids when exactly \"true\""),
                            filter_param("vaccinated", "Only vaccinated pets when exactly \"true\""),
                            filter_param("sort", "newest (default), name, or age"),
                            filter_param("page", "1-based page number"),
                            filter_param("per_page", "Page size, default 8")
                        ],
                        "responses": {
                            "200": {
                                "description": "One page of matching pets",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/PetPage" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/api/pets/{id}": {
                    "get": {
                        "summary": "Pet detail",
                        "tags": ["Pets"],
                        "parameters": [{
                            "name": "id",
                            "in": "path",
                            "required": true,
                            "schema": { "type": "integer" }
                        }],
                        "responses": {
                            "200": {
                                "description": "The pet, including its description",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Pet" }
                                    }
                                }
                            },
                            "404": {
                                "description": "Unknown pet",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/ErrorResponse" }
                                    }
                                }
                            }
                        }
                    }
                },
                "/api/admin/pets": {
                    "post": {
                        "summary": "Add a pet",
                        "tags": ["Pets"],
                        "requestBody": {
                            "required": true,
                            "content": {
                                "application/json": {
                                    "schema": { "$ref": "#/components/schemas/CreatePet" }
                                }
                            }
                        },
                        "responses": {
                            "200": {
                                "description": "Pet created",
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
                    "PetSummary": pet_schema(false),
                    "Pet": pet_schema(true),
                    "PetPage": {
                        "type": "object",
                        "properties": {
                            "items": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/PetSummary" }
                            },
                            "page": { "type": "integer" },
                            "pages": { "type": "integer" },
                            "total": { "type": "integer" }
                        },
                        "required": ["items", "page", "pages", "total"]
                    },
                    "CreatePet": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string" },
                            "species": { "type": "string" },
                            "breed": { "type": "string" },
                            "age": { "type": "string", "description": "Baby, Young, Adult or Senior" },
                            "size": { "type": "string", "description": "Small, Medium, Large or X-Large" },
                            "gender": { "type": "string" },
                            "city": { "type": "string" },
                            "state": { "type": "string" },
                            "good_with_kids": { "type": "boolean" },
                            "vaccinated": { "type": "boolean" },
                            "description": { "type": "string" },
                            "photo_url": { "type": "string" }
                        },
                        "required": ["name", "species", "age", "size", "gender"]
                    },
                    "Created": {
                        "type": "object",
                        "properties": {
                            "ok": { "type": "boolean" },
                            "id": { "type": "integer" }
                        },
                        "required": ["ok", "id"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_pet",
            up: r#"
                CREATE TABLE IF NOT EXISTS pet (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL,
                    species TEXT NOT NULL,
                    breed TEXT,
                    age TEXT NOT NULL,
                    size TEXT NOT NULL,
                    gender TEXT NOT NULL,
                    city TEXT,
                    state TEXT,
                    good_with_kids BOOLEAN NOT NULL DEFAULT 0,
                    vaccinated BOOLEAN NOT NULL DEFAULT 0,
                    description TEXT,
                    photo_url TEXT,
                    created_at TEXT NOT NULL
                );
                CREATE INDEX IF NOT EXISTS idx_pet_created_at ON pet (created_at);
                "#,
        }]
    }

    async fn start(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        if ctx.settings.seed.enabled {
            let repo = PetRepository::new(ctx.db.clone());
            seed::seed_if_empty(&repo).await?;
        }
        tracing::info!(module = self.name(), "pets module started");
        Ok(())
    }
}

fn pet_schema(with_description: bool) -> serde_json::Value {
    let mut schema = json!({
        "type": "object",
        "properties": {
            "id": { "type": "integer" },
            "name": { "type": "string" },
            "species": { "type": "string" },
            "breed": { "type": "string", "nullable": true },
            "age": { "type": "string" },
            "size": { "type": "string" },
            "gender": { "type": "string" },
            "city": { "type": "string", "nullable": true },
            "state": { "type": "string", "nullable": true },
            "good_with_kids": { "type": "boolean" },
            "vaccinated": { "type": "boolean" },
            "photo_url": { "type": "string", "nullable": true },
            "created_at": { "type": "string", "format": "date-time" }
        },
        "required": ["id", "name", "species", "age", "size", "gender", "good_with_kids", "vaccinated", "created_at"]
    });
    if with_description {
        schema["properties"]["description"] = json!({ "type": "string", "nullable": true });
    }
    schema
}

/// Create a new instance of the pets module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(PetsModule::new())
}
