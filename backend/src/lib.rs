//! Tickle: a climbing log for boulders, multi-pitch routes, attempts and todos.
//!
//! The crate follows a hexagonal layout. `domain` owns the model, ports and
//! services; `inbound::http` exposes them over Actix Web and
//! `outbound::persistence` stores them in PostgreSQL through Diesel.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
