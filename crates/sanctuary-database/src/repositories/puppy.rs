//! Puppy repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use sanctuary_core::error::{AppError, ErrorKind};
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_entity::puppy::model::{CreatePuppy, Puppy, UpdatePuppy};
use sanctuary_entity::puppy::status::PuppyStatus;

/// Repository for puppy catalog CRUD operations.
#[derive(Debug, Clone)]
pub struct PuppyRepository {
    pool: PgPool,
}

impl PuppyRepository {
    /// Create a new puppy repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a puppy by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Puppy>> {
        sqlx::query_as::<_, Puppy>("SELECT * FROM puppies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find puppy", e))
    }

    /// List puppies, optionally filtered by status.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        status: Option<PuppyStatus>,
    ) -> AppResult<PageResponse<Puppy>> {
        let (total, puppies) = match status {
            Some(status) => {
                let total: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM puppies WHERE status = $1")
                        .bind(status)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to count puppies", e)
                        })?;

                let puppies = sqlx::query_as::<_, Puppy>(
                    "SELECT * FROM puppies WHERE status = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(status)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list puppies", e)
                })?;

                (total, puppies)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM puppies")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count puppies", e)
                    })?;

                let puppies = sqlx::query_as::<_, Puppy>(
                    "SELECT * FROM puppies ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list puppies", e)
                })?;

                (total, puppies)
            }
        };

        Ok(PageResponse::new(
            puppies,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new puppy listing.
    pub async fn create(&self, new: &CreatePuppy) -> AppResult<Puppy> {
        sqlx::query_as::<_, Puppy>(
            "INSERT INTO puppies (name, age, gender, adoption_fee, deposit_amount, description, image_urls, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, 'available') RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.age)
        .bind(&new.gender)
        .bind(new.adoption_fee)
        .bind(new.deposit_amount)
        .bind(&new.description)
        .bind(&new.image_urls)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create puppy", e))
    }

    /// Apply a partial update to a puppy listing.
    pub async fn update(&self, id: Uuid, update: &UpdatePuppy) -> AppResult<Option<Puppy>> {
        sqlx::query_as::<_, Puppy>(
            "UPDATE puppies SET \
                name = COALESCE($2, name), \
                age = COALESCE($3, age), \
                gender = COALESCE($4, gender), \
                adoption_fee = COALESCE($5, adoption_fee), \
                deposit_amount = COALESCE($6, deposit_amount), \
                description = COALESCE($7, description), \
                image_urls = COALESCE($8, image_urls), \
                status = COALESCE($9, status), \
                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.age)
        .bind(&update.gender)
        .bind(update.adoption_fee)
        .bind(update.deposit_amount)
        .bind(&update.description)
        .bind(&update.image_urls)
        .bind(update.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update puppy", e))
    }

    /// Delete a puppy listing. Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM puppies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete puppy", e))?;
        Ok(result.rows_affected())
    }
}
