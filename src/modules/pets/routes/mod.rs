use axum::{
    extract::{Path, Query, State},
    Json,
};
use pawhaven_http::{error::AppError, extract::JsonBody, response::Created};
use pawhaven_kernel::AppState;

use super::models::{CreatePetRequest, Pet, PetPage};
use super::query::{ListParams, PetQuery};
use super::repository::PetRepository;

/// # GET /api/pets
pub async fn list_pets(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<PetPage>, AppError> {
    let query = PetQuery::from_params(params, &state.settings.listing);
    let page = PetRepository::new(state.db.clone()).list(&query).await?;

    tracing::debug!(
        page = page.page,
        pages = page.pages,
        total = page.total,
        sort = ?query.sort,
        "pet listing served"
    );

    Ok(Json(page))
}

/// # GET /api/pets/{id}
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, AppError> {
    let pet = find_pet(&state, &id).await?;
    Ok(Json(pet))
}

/// # POST /api/admin/pets
///
/// Open to any caller; there is no admin authentication.
pub async fn create_pet(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreatePetRequest>,
) -> Result<Json<Created>, AppError> {
    let pet = request
        .validate()
        .map_err(|errors| AppError::field_errors(&errors))?;

    let id = PetRepository::new(state.db.clone()).insert(&pet).await?;
    tracing::info!(pet_id = id, name = %pet.name, species = %pet.species, "pet added");

    Ok(Json(Created::new(id)))
}

/// Look up a pet by the raw path segment; anything that is not a known id
/// is a not-found.
pub async fn find_pet(state: &AppState, raw_id: &str) -> Result<Pet, AppError> {
    let not_found = || AppError::not_found(format!("Pet {raw_id} not found"));

    let id: i64 = raw_id.parse().map_err(|_| not_found())?;
    PetRepository::new(state.db.clone())
        .get(id)
        .await?
        .ok_or_else(not_found)
}
