use chrono::Utc;
use sqlx::SqlitePool;

use super::models::{AdoptionRequest, NewInquiry};

/// Storage access for adoption inquiries. Rows are written once; reads exist
/// for tests and operators, not for any public endpoint.
#[derive(Debug, Clone)]
pub struct AdoptionRepository {
    pool: SqlitePool,
}

impl AdoptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, inquiry: &NewInquiry) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO adoption_request \
             (pet_id, full_name, email, phone, message, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(inquiry.pet_id)
        .bind(&inquiry.full_name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(&inquiry.message)
        .bind(inquiry.status.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn get(&self, id: i64) -> Result<Option<AdoptionRequest>, sqlx::Error> {
        sqlx::query_as::<_, AdoptionRequest>(
            "SELECT id, pet_id, full_name, email, phone, message, status, created_at \
             FROM adoption_request WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count_for_pet(&self, pet_id: i64) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM adoption_request WHERE pet_id = ?")
            .bind(pet_id)
            .fetch_one(&self.pool)
            .await
    }
}
