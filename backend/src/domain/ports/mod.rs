//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by the persistence adapter;
//! driving ports (`*Query`, `*Command`) are implemented by the domain
//! services and consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod area_repository;
mod attempt_repository;
mod boulder_repository;
mod catalogue_command;
mod catalogue_query;
mod climbing_log_command;
mod climbing_log_query;
mod difficulty_repository;
mod repository_error;
mod route_repository;
mod todo_repository;
mod user_repository;

#[cfg(test)]
pub use area_repository::MockAreaRepository;
pub use area_repository::AreaRepository;
#[cfg(test)]
pub use attempt_repository::MockAttemptRepository;
pub use attempt_repository::AttemptRepository;
#[cfg(test)]
pub use boulder_repository::MockBoulderRepository;
pub use boulder_repository::BoulderRepository;
#[cfg(test)]
pub use catalogue_command::MockCatalogueCommand;
pub use catalogue_command::{CatalogueCommand, FixtureCatalogueCommand};
#[cfg(test)]
pub use catalogue_query::MockCatalogueQuery;
pub use catalogue_query::{CatalogueQuery, FixtureCatalogueQuery};
#[cfg(test)]
pub use climbing_log_command::MockClimbingLogCommand;
pub use climbing_log_command::{ClimbingLogCommand, FixtureClimbingLogCommand};
#[cfg(test)]
pub use climbing_log_query::MockClimbingLogQuery;
pub use climbing_log_query::{ClimbingLogQuery, FixtureClimbingLogQuery};
#[cfg(test)]
pub use difficulty_repository::MockDifficultyRepository;
pub use difficulty_repository::DifficultyRepository;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use route_repository::MockRouteRepository;
pub use route_repository::RouteRepository;
#[cfg(test)]
pub use todo_repository::MockTodoRepository;
pub use todo_repository::TodoRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
