//! # hourboard-db
//!
//! Document store layer implementing the repository traits of `hourboard-core`.
//!
//! ## Overview
//!
//! Two adapters are provided:
//!
//! - PostgreSQL via SQLx: one table per collection, database models with
//!   `FromRow` derives, model → entity mappers, and `Pg*Repository` types
//! - an in-process store (`Memory*Repository`), insertion ordered, used for
//!   local runs and tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hourboard_db::pool::{create_pool, run_migrations, PoolConfig};
//! use hourboard_db::repositories::PgUserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     run_migrations(&pool, "./migrations").await?;
//!     let users = PgUserRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::{
    MemoryAdvisorRequestRepository, MemoryArchivalRunRepository, MemoryEventRepository,
    MemoryHistoricalEventRepository, MemoryStoreHealth, MemoryUserRepository,
};
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgAdvisorRequestRepository, PgArchivalRunRepository, PgEventRepository,
    PgHistoricalEventRepository, PgStoreHealth, PgUserRepository,
};
