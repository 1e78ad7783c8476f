//! PostgreSQL implementation of AdvisorRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hourboard_core::traits::{AdvisorRequestRepository, RepoResult};
use hourboard_core::{AdvisorRequest, DocumentId, RequestStatus};

use crate::models::AdvisorRequestModel;

use super::error::{map_db_error, request_not_found};

/// PostgreSQL implementation of AdvisorRequestRepository
#[derive(Clone)]
pub struct PgAdvisorRequestRepository {
    pool: PgPool,
}

impl PgAdvisorRequestRepository {
    /// Create a new PgAdvisorRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdvisorRequestRepository for PgAdvisorRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<AdvisorRequest>> {
        let result = sqlx::query_as::<_, AdvisorRequestModel>(
            r"
            SELECT id, user_id, user_name, status, requested_at
            FROM advisor_requests
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(AdvisorRequest::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<AdvisorRequest>> {
        let results = sqlx::query_as::<_, AdvisorRequestModel>(
            r"
            SELECT id, user_id, user_name, status, requested_at
            FROM advisor_requests
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AdvisorRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_pending_by_user(&self, user_id: &DocumentId) -> RepoResult<Vec<AdvisorRequest>> {
        let results = sqlx::query_as::<_, AdvisorRequestModel>(
            r"
            SELECT id, user_id, user_name, status, requested_at
            FROM advisor_requests
            WHERE user_id = $1 AND status = $2
            ORDER BY seq
            ",
        )
        .bind(user_id.as_str())
        .bind(RequestStatus::Pending.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AdvisorRequest::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, request: &AdvisorRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO advisor_requests (id, user_id, user_name, status, requested_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(request.id.as_str())
        .bind(request.user_id.as_str())
        .bind(&request.user_name)
        .bind(request.status.as_str())
        .bind(request.timestamp)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM advisor_requests WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(request_not_found(id));
        }

        Ok(())
    }
}
