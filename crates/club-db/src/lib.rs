//! # club-db
//!
//! Database layer implementing the club-core store traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgSnapshotRepository` (read-only) and `PgWeeklyDeltaRepository` (upsert + read-back)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use club_db::pool::{create_pool, PoolConfig};
//! use club_db::repositories::PgWeeklyDeltaRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::default()).await?;
//!     let delta_repo = PgWeeklyDeltaRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, PgPool, PoolConfig, DEFAULT_MIGRATIONS_DIR};
pub use repositories::{PgSnapshotRepository, PgWeeklyDeltaRepository};
