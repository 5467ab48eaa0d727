//! Domain primitives, aggregates and services.
//!
//! Purpose: define the climbing-log model (areas, grades, boulders, routes,
//! pitches, attempts, todos and users) as strongly typed values that the
//! HTTP and persistence adapters translate to and from. Types here carry no
//! framework dependencies beyond serde for the small wire enums.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable error identifier.
//! - TraceId: per-request correlation identifier.
//! - Catalogue entities: Area, Difficulty, Boulder, Route, Pitch.
//! - Log entities: User, Attempt, Todo, ClimbRef.
//! - Services: CatalogueService, ClimbingLogService.

pub mod area;
pub mod attempt;
pub mod boulder;
pub mod catalogue_service;
pub mod climb;
pub mod climbing_log_service;
pub mod difficulty;
pub mod error;
pub mod ports;
pub mod route;
pub mod todo;
pub mod trace_id;
pub mod user;

pub use self::area::{AREA_NAME_MAX, Area, AreaDetail, AreaName, AreaValidationError};
pub use self::attempt::{
    Attempt, AttemptDraft, AttemptResult, ParseAttemptResultError, ParseProtectionError,
    Protection,
};
pub use self::boulder::{Boulder, BoulderDraft, NewBoulder};
pub use self::catalogue_service::CatalogueService;
pub use self::climb::{
    CLIMB_NAME_MAX, ClimbName, ClimbRef, ClimbRefError, ClimbValidationError,
    MountainProjectUrl, xor,
};
pub use self::climbing_log_service::ClimbingLogService;
pub use self::difficulty::{
    DIFFICULTY_NAME_MAX, DIFFICULTY_ORDER_MAX, Difficulty, DifficultyName, DifficultyScale,
    DifficultyValidationError, ParseDifficultyScaleError,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::route::{
    NewPitch, NewRoute, NewRouteDraft, ParseProtectionStyleError, Pitch, ProtectionStyle, Route,
    RouteDraft, hardest_pitch,
};
pub use self::todo::{ParseTodoStyleError, Todo, TodoDraft, TodoEntry, TodoStyle};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{DisplayName, User, UserId, UserValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use tickle::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::not_found("no such boulder"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
