//! PostgreSQL implementation of HistoricalEventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hourboard_core::traits::{HistoricalEventRepository, RepoResult};
use hourboard_core::{DocumentId, HistoricalEvent, SchoolYear};

use crate::mappers::to_db_count;
use crate::models::HistoricalEventModel;

use super::error::{event_not_found, map_db_error};

/// PostgreSQL implementation of HistoricalEventRepository
#[derive(Clone)]
pub struct PgHistoricalEventRepository {
    pool: PgPool,
}

impl PgHistoricalEventRepository {
    /// Create a new PgHistoricalEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HistoricalEventRepository for PgHistoricalEventRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<HistoricalEvent>> {
        let results = sqlx::query_as::<_, HistoricalEventModel>(
            r"
            SELECT id, user_id, name, hours, tag, date, school_year
            FROM historical_events
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(HistoricalEvent::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_school_year(&self, school_year: &SchoolYear) -> RepoResult<Vec<HistoricalEvent>> {
        let results = sqlx::query_as::<_, HistoricalEventModel>(
            r"
            SELECT id, user_id, name, hours, tag, date, school_year
            FROM historical_events
            WHERE school_year = $1
            ORDER BY seq
            ",
        )
        .bind(school_year.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(HistoricalEvent::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn upsert(&self, event: &HistoricalEvent) -> RepoResult<()> {
        let hours = event.hours.map(to_db_count).transpose()?;

        sqlx::query(
            r"
            INSERT INTO historical_events (id, user_id, name, hours, tag, date, school_year)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET user_id = EXCLUDED.user_id,
                name = EXCLUDED.name,
                hours = EXCLUDED.hours,
                tag = EXCLUDED.tag,
                date = EXCLUDED.date,
                school_year = EXCLUDED.school_year
            ",
        )
        .bind(event.id.as_str())
        .bind(event.user_id.as_str())
        .bind(&event.name)
        .bind(hours)
        .bind(&event.tag)
        .bind(event.date)
        .bind(event.school_year.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM historical_events WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }
}
