use axum::{extract::State, Json};
use pawhaven_http::{error::AppError, extract::JsonBody, response::Created};
use pawhaven_kernel::AppState;

use super::models::SubmitInquiry;
use super::repository::AdoptionRepository;

/// # POST /api/adopt
pub async fn submit_inquiry(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SubmitInquiry>,
) -> Result<Json<Created>, AppError> {
    let inquiry = payload
        .validate()
        .map_err(|errors| AppError::field_errors(&errors))?;

    let id = AdoptionRepository::new(state.db.clone())
        .insert(&inquiry)
        .await?;
    tracing::info!(inquiry_id = id, pet_id = inquiry.pet_id, "adoption inquiry received");

    Ok(Json(Created::new(id)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::modules::adoptions::repository::AdoptionRepository;
    use crate::modules::test_support::{app, migrated_pool, post_json};

    #[tokio::test]
    async fn empty_full_name_is_rejected() {
        let app = app(migrated_pool().await);

        let (status, body) = post_json(
            &app,
            "/api/adopt",
            json!({"pet_id": 1, "full_name": "", "email": "a@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["ok"], false);
        assert_eq!(body["details"][0]["field"], "full_name");
    }

    #[tokio::test]
    async fn missing_pet_id_is_rejected() {
        let app = app(migrated_pool().await);

        let (status, body) = post_json(
            &app,
            "/api/adopt",
            json!({"full_name": "Asha", "email": "a@example.com"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields.");
    }

    #[tokio::test]
    async fn pet_id_may_be_sent_as_text() {
        let pool = migrated_pool().await;
        let app = app(pool.clone());
        let repo = AdoptionRepository::new(pool);

        for raw in ["3", " 3 "] {
            let (status, body) = post_json(
                &app,
                "/api/adopt",
                json!({"pet_id": raw, "full_name": "Asha", "email": "a@example.com"}),
            )
            .await;

            assert_eq!(status, StatusCode::OK, "pet_id {raw:?}");
            let stored = repo.get(body["id"].as_i64().unwrap()).await.unwrap().unwrap();
            assert_eq!(stored.pet_id, 3);
        }
        assert_eq!(repo.count_for_pet(3).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn blank_or_non_numeric_pet_id_is_rejected() {
        let app = app(migrated_pool().await);

        let (status, body) = post_json(
            &app,
            "/api/adopt",
            json!({"pet_id": "", "full_name": "Asha", "email": "a@example.com"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["field"], "pet_id");
        assert_eq!(body["details"][0]["error"], "required");

        let (status, body) = post_json(
            &app,
            "/api/adopt",
            json!({"pet_id": "three", "full_name": "Asha", "email": "a@example.com"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"][0]["field"], "pet_id");
        assert_eq!(body["details"][0]["error"], "invalid");
    }

    #[tokio::test]
    async fn valid_inquiry_is_stored_pending_even_for_unknown_pet() {
        let pool = migrated_pool().await;
        let app = app(pool.clone());

        let (status, body) = post_json(
            &app,
            "/api/adopt",
            json!({
                "pet_id": 4242,
                "full_name": "  Asha Rao ",
                "email": "asha@example.com",
                "message": "We have a big garden."
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
        let id = body["id"].as_i64().unwrap();

        let repo = AdoptionRepository::new(pool);
        let stored = repo.get(id).await.unwrap().unwrap();
        assert_eq!(stored.status, "Pending");
        assert_eq!(stored.pet_id, 4242);
        assert_eq!(stored.full_name, "Asha Rao");
        assert_eq!(stored.phone.as_deref(), Some(""));
        assert_eq!(repo.count_for_pet(4242).await.unwrap(), 1);
    }
}
