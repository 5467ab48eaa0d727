//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! `diesel-async` with `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories translate between Diesel rows and
//!   domain types and classify database errors. Rules such as "a route's
//!   grade is its hardest pitch" stay in the domain.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Storage-enforced integrity**: protect/cascade policies, unique pitch
//!   order and the boulder/route exclusive-or on attempts and todos are
//!   declared in the migration, so direct SQL writes obey them too.
//!
//! # Example
//!
//! ```ignore
//! use tickle::outbound::persistence::{DbPool, DieselRouteRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/tickle")).await?;
//! let routes = DieselRouteRepository::new(pool);
//! ```

mod diesel_area_repository;
mod diesel_attempt_repository;
mod diesel_boulder_repository;
mod diesel_difficulty_repository;
mod diesel_error_mapping;
mod diesel_helpers;
mod diesel_route_repository;
mod diesel_todo_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_area_repository::DieselAreaRepository;
pub use diesel_attempt_repository::DieselAttemptRepository;
pub use diesel_boulder_repository::DieselBoulderRepository;
pub use diesel_difficulty_repository::DieselDifficultyRepository;
pub use diesel_route_repository::DieselRouteRepository;
pub use diesel_todo_repository::DieselTodoRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_MAX_SIZE, DbPool, PoolConfig, PoolError};
