//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use hourboard_core::traits::{RepoResult, UserRepository};
use hourboard_core::{DocumentId, DomainError, Role, User};

use crate::mappers::{from_db_count, to_db_count};
use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &DocumentId) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocumentId) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, hours, temporary_advisor
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, hours, temporary_advisor
            FROM users
            ORDER BY seq
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_role(&self, role: Role) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, role, hours, temporary_advisor
            FROM users
            WHERE role = $1
            ORDER BY seq
            ",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, user: &User) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, name, email, role, hours, temporary_advisor)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(user.id.as_str())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(to_db_count(user.hours)?)
        .bind(user.temporary_advisor)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists(user.id.clone())))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_role(&self, id: &DocumentId, role: Role) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET role = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_hours(&self, id: &DocumentId, hours: u32) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET hours = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(to_db_count(hours)?)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_hours(&self, id: &DocumentId, delta: u32) -> RepoResult<u32> {
        let total = sqlx::query_scalar::<_, i32>(
            r"
            UPDATE users
            SET hours = hours + $2
            WHERE id = $1
            RETURNING hours
            ",
        )
        .bind(id.as_str())
        .bind(to_db_count(delta)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match total {
            Some(total) => from_db_count(total),
            None => Err(user_not_found(id)),
        }
    }

    #[instrument(skip(self))]
    async fn set_temporary_advisor(&self, id: &DocumentId, value: bool) -> RepoResult<()> {
        let result = sqlx::query("UPDATE users SET temporary_advisor = $2 WHERE id = $1")
            .bind(id.as_str())
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn compare_and_set_temporary_advisor(
        &self,
        id: &DocumentId,
        expected: bool,
        new: bool,
    ) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET temporary_advisor = $3
            WHERE id = $1 AND temporary_advisor = $2
            ",
        )
        .bind(id.as_str())
        .bind(expected)
        .bind(new)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }
        if self.exists(id).await? {
            Ok(false)
        } else {
            Err(user_not_found(id))
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &DocumentId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }
}
