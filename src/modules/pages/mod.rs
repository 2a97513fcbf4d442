//! HTML shells for the browser client. The pages carry no listing logic;
//! `/static/js/app.js` fills them from the JSON API.

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use pawhaven_http::error::AppError;
use pawhaven_kernel::{AppState, Module};

use crate::modules::pets::routes::find_pet;
use crate::utils::escape_html;

const INDEX: &str = include_str!("templates/index.html");
const ADMIN: &str = include_str!("templates/admin.html");
const PET_DETAIL: &str = include_str!("templates/pet_detail.html");
const NOT_FOUND: &str = include_str!("templates/not_found.html");

pub struct PagesModule;

impl PagesModule {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Module for PagesModule {
    fn name(&self) -> &'static str {
        "pages"
    }

    fn routes(&self, state: AppState) -> Router {
        Router::new()
            .route("/", get(home))
            .route("/admin", get(admin))
            .route("/pets/{id}", get(pet_detail))
            .with_state(state)
    }
}

async fn home() -> Html<&'static str> {
    Html(INDEX)
}

async fn admin() -> Html<&'static str> {
    Html(ADMIN)
}

async fn pet_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let pet = match find_pet(&state, &id).await {
        Ok(pet) => pet,
        Err(AppError::NotFound { .. }) => {
            return Ok((StatusCode::NOT_FOUND, Html(NOT_FOUND)).into_response());
        }
        Err(err) => return Err(err),
    };

    // `<` is escaped so a description cannot close the script element early.
    let pet_json = serde_json::to_string(&pet)
        .map_err(anyhow::Error::from)?
        .replace('<', "\\u003c");

    let page = render(
        PET_DETAIL,
        &[
            ("id", pet.id.to_string()),
            ("name", escape_html(&pet.name)),
            ("pet_json", pet_json),
        ],
    );
    Ok(Html(page).into_response())
}

/// Replace `{{key}}` markers in one pass. Substituted values are never
/// rescanned, and unknown markers are left as they are.
fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match values.iter().find(|(name, _)| *name == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(key);
                        out.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Create a new instance of the pages module
pub fn create_module() -> std::sync::Arc<dyn Module> {
    std::sync::Arc::new(PagesModule::new())
}
