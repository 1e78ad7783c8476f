//! PostgreSQL implementation of ArchivalRunRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hourboard_core::traits::{ArchivalRunRepository, RepoResult};
use hourboard_core::{ArchivalRun, SchoolYear};

use crate::mappers::to_db_count;
use crate::models::ArchivalRunModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ArchivalRunRepository
#[derive(Clone)]
pub struct PgArchivalRunRepository {
    pool: PgPool,
}

impl PgArchivalRunRepository {
    /// Create a new PgArchivalRunRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArchivalRunRepository for PgArchivalRunRepository {
    #[instrument(skip(self))]
    async fn find(&self, school_year: &SchoolYear) -> RepoResult<Option<ArchivalRun>> {
        let result = sqlx::query_as::<_, ArchivalRunModel>(
            r"
            SELECT school_year, started_at, events_archived, events_archived_at,
                   hours_reset_at, completed_at
            FROM archival_runs
            WHERE school_year = $1
            ",
        )
        .bind(school_year.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ArchivalRun::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn save(&self, run: &ArchivalRun) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO archival_runs (school_year, started_at, events_archived,
                                       events_archived_at, hours_reset_at, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (school_year) DO UPDATE
            SET events_archived = EXCLUDED.events_archived,
                events_archived_at = EXCLUDED.events_archived_at,
                hours_reset_at = EXCLUDED.hours_reset_at,
                completed_at = EXCLUDED.completed_at
            ",
        )
        .bind(run.school_year.as_str())
        .bind(run.started_at)
        .bind(to_db_count(run.events_archived)?)
        .bind(run.events_archived_at)
        .bind(run.hours_reset_at)
        .bind(run.completed_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
