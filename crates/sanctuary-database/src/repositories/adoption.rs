//! Adoption request repository implementation.
//!
//! Terminal transitions use atomic conditional updates guarded by
//! `status = 'pending'`. When two writers race on the same request, the
//! guard admits exactly one; the other sees zero rows and maps that to a
//! state conflict at the service layer.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use sanctuary_core::error::{AppError, ErrorKind};
use sanctuary_core::result::AppResult;
use sanctuary_core::types::pagination::{PageRequest, PageResponse};
use sanctuary_entity::adoption::model::{AdoptionRequest, NewAdoptionRequest};
use sanctuary_entity::adoption::status::RequestStatus;

/// Result of a successful approval transaction.
#[derive(Debug, Clone)]
pub struct ApprovalOutcome {
    /// The request that was approved.
    pub approved: AdoptionRequest,
    /// Sibling pending requests for the same puppy, auto-rejected in the
    /// same transaction.
    pub auto_rejected: Vec<AdoptionRequest>,
}

/// Repository for adoption request CRUD and lifecycle transitions.
#[derive(Debug, Clone)]
pub struct AdoptionRepository {
    pool: PgPool,
}

impl AdoptionRepository {
    /// Create a new adoption repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new pending request with its deposit snapshot.
    pub async fn insert(&self, new: &NewAdoptionRequest) -> AppResult<AdoptionRequest> {
        sqlx::query_as::<_, AdoptionRequest>(
            "INSERT INTO adoption_requests (puppy_id, applicant_id, status, application_data, deposit_amount) \
             VALUES ($1, $2, 'pending', $3, $4) RETURNING *",
        )
        .bind(new.puppy_id)
        .bind(new.applicant_id)
        .bind(Json(&new.application_data))
        .bind(new.deposit_amount)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert adoption request", e))
    }

    /// Find a request by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<AdoptionRequest>> {
        sqlx::query_as::<_, AdoptionRequest>("SELECT * FROM adoption_requests WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find adoption request", e)
            })
    }

    /// List requests submitted by an applicant.
    pub async fn find_by_applicant(
        &self,
        applicant_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<AdoptionRequest>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM adoption_requests WHERE applicant_id = $1")
                .bind(applicant_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
                })?;

        let requests = sqlx::query_as::<_, AdoptionRequest>(
            "SELECT * FROM adoption_requests WHERE applicant_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(applicant_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list requests", e))?;

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all requests, optionally filtered by status.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        status: Option<RequestStatus>,
    ) -> AppResult<PageResponse<AdoptionRequest>> {
        let (total, requests) = match status {
            Some(status) => {
                let total: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM adoption_requests WHERE status = $1",
                )
                .bind(status)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
                })?;

                let requests = sqlx::query_as::<_, AdoptionRequest>(
                    "SELECT * FROM adoption_requests WHERE status = $1 \
                     ORDER BY created_at DESC LIMIT $2 OFFSET $3",
                )
                .bind(status)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list requests", e)
                })?;

                (total, requests)
            }
            None => {
                let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM adoption_requests")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to count requests", e)
                    })?;

                let requests = sqlx::query_as::<_, AdoptionRequest>(
                    "SELECT * FROM adoption_requests ORDER BY created_at DESC LIMIT $1 OFFSET $2",
                )
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list requests", e)
                })?;

                (total, requests)
            }
        };

        Ok(PageResponse::new(
            requests,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Approve a pending request.
    ///
    /// In one transaction: flips the request to `approved` (guarded by
    /// `status = 'pending'`), marks the puppy `adopted`, and auto-rejects
    /// every other pending request for the same puppy. Returns `None` if
    /// the request was not pending (missing or already decided); nothing
    /// is written in that case.
    pub async fn approve(&self, id: Uuid) -> AppResult<Option<ApprovalOutcome>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let approved = sqlx::query_as::<_, AdoptionRequest>(
            "UPDATE adoption_requests SET status = 'approved', updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to approve request", e))?;

        let Some(approved) = approved else {
            return Ok(None);
        };

        sqlx::query("UPDATE puppies SET status = 'adopted', updated_at = NOW() WHERE id = $1")
            .bind(approved.puppy_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to mark puppy adopted", e)
            })?;

        let auto_rejected = sqlx::query_as::<_, AdoptionRequest>(
            "UPDATE adoption_requests SET status = 'rejected', updated_at = NOW() \
             WHERE puppy_id = $1 AND status = 'pending' AND id <> $2 RETURNING *",
        )
        .bind(approved.puppy_id)
        .bind(id)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to auto-reject siblings", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit approval", e)
        })?;

        Ok(Some(ApprovalOutcome {
            approved,
            auto_rejected,
        }))
    }

    /// Reject a pending request.
    ///
    /// Atomic conditional update guarded by `status = 'pending'`. Returns
    /// `None` if the request was not pending.
    pub async fn reject(&self, id: Uuid) -> AppResult<Option<AdoptionRequest>> {
        sqlx::query_as::<_, AdoptionRequest>(
            "UPDATE adoption_requests SET status = 'rejected', updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to reject request", e))
    }

    /// Hard-delete a request. Returns the number of rows removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM adoption_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete request", e)
            })?;
        Ok(result.rows_affected())
    }
}
