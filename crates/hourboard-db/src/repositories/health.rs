//! PostgreSQL readiness probe

use async_trait::async_trait;
use sqlx::PgPool;

use hourboard_core::traits::StoreHealth;

/// Reports whether the pool can reach the database
#[derive(Clone)]
pub struct PgStoreHealth {
    pool: PgPool,
}

impl PgStoreHealth {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreHealth for PgStoreHealth {
    async fn is_healthy(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}
