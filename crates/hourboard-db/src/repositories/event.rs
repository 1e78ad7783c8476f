//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hourboard_core::traits::{EventRepository, RepoResult};
use hourboard_core::{DocumentId, Event};

use crate::mappers::to_db_count;
use crate::models::EventModel;

use super::error::{event_not_found, map_db_error};

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, user_id, name, hours, tag, date
            FROM events
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Event::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, user_id, name, hours, tag, date
            FROM events
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Event::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: &DocumentId) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r"
            SELECT id, user_id, name, hours, tag, date
            FROM events
            WHERE user_id = $1
            ORDER BY seq
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Event::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, event: &Event) -> RepoResult<()> {
        let hours = event.hours.map(to_db_count).transpose()?;

        sqlx::query(
            r"
            INSERT INTO events (id, user_id, name, hours, tag, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(event.id.as_str())
        .bind(event.user_id.as_str())
        .bind(&event.name)
        .bind(hours)
        .bind(&event.tag)
        .bind(event.date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_tag(&self, id: &DocumentId, tag: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE events SET tag = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(tag)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
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
