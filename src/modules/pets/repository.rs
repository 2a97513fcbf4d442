use chrono::Utc;
use sqlx::SqlitePool;

use super::models::{NewPet, Pet, PetPage, PetSummary};
use super::query::PetQuery;

const INSERT_PET: &str = "INSERT INTO pet (name, species, breed, age, size, gender, city, state, \
     good_with_kids, vaccinated, description, photo_url, created_at) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// Storage access for pet records. Pets are created once and never changed.
#[derive(Debug, Clone)]
pub struct PetRepository {
    pool: SqlitePool,
}

impl PetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Run the listing query. Pages past the end yield no items, not an error.
    pub async fn list(&self, query: &PetQuery) -> Result<PetPage, sqlx::Error> {
        let total: i64 = query
            .count_query()
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let pages = query.page.pages_for(total);
        let items = if query.page.page > pages {
            Vec::new()
        } else {
            query
                .select_query()
                .build_query_as::<PetSummary>()
                .fetch_all(&self.pool)
                .await?
        };

        Ok(PetPage {
            items,
            page: query.page.page,
            pages,
            total,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Option<Pet>, sqlx::Error> {
        sqlx::query_as::<_, Pet>(
            "SELECT id, name, species, breed, age, size, gender, city, state, \
             good_with_kids, vaccinated, description, photo_url, created_at \
             FROM pet WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pet")
            .fetch_one(&self.pool)
            .await
    }

    /// Insert a pet stamped with the current time and return its id.
    pub async fn insert(&self, pet: &NewPet) -> Result<i64, sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        insert_with(&mut conn, pet).await
    }

    /// Insert several pets atomically; either all rows land or none do.
    pub async fn insert_all(&self, pets: &[NewPet]) -> Result<Vec<i64>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(pets.len());
        for pet in pets {
            ids.push(insert_with(&mut tx, pet).await?);
        }
        tx.commit().await?;
        Ok(ids)
    }
}

async fn insert_with(conn: &mut sqlx::SqliteConnection, pet: &NewPet) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(INSERT_PET)
        .bind(&pet.name)
        .bind(&pet.species)
        .bind(&pet.breed)
        .bind(pet.age.as_str())
        .bind(pet.size.as_str())
        .bind(pet.gender.as_str())
        .bind(&pet.city)
        .bind(&pet.state)
        .bind(pet.good_with_kids)
        .bind(pet.vaccinated)
        .bind(&pet.description)
        .bind(&pet.photo_url)
        .bind(Utc::now())
        .execute(conn)
        .await?;

    Ok(result.last_insert_rowid())
}
