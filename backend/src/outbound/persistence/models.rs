//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{
    areas, attempts, boulder_difficulties, boulders, pitches, route_difficulties, routes, todos,
    users,
};

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub display_name: &'a str,
}

// ---------------------------------------------------------------------------
// Areas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = areas)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AreaRow {
    pub id: Uuid,
    pub name: String,
    pub parent_id: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = areas)]
pub(crate) struct NewAreaRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub parent_id: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Difficulties
// ---------------------------------------------------------------------------

/// Grade row shape shared by both scales.
#[derive(Debug, Clone)]
pub(crate) struct DifficultyRow {
    pub id: Uuid,
    pub sort_order: i16,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boulder_difficulties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BoulderDifficultyRow {
    pub id: Uuid,
    pub sort_order: i16,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = route_difficulties)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RouteDifficultyRow {
    pub id: Uuid,
    pub sort_order: i16,
    pub name: String,
}

impl From<BoulderDifficultyRow> for DifficultyRow {
    fn from(row: BoulderDifficultyRow) -> Self {
        Self {
            id: row.id,
            sort_order: row.sort_order,
            name: row.name,
        }
    }
}

impl From<RouteDifficultyRow> for DifficultyRow {
    fn from(row: RouteDifficultyRow) -> Self {
        Self {
            id: row.id,
            sort_order: row.sort_order,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boulder_difficulties)]
pub(crate) struct NewBoulderDifficultyRow<'a> {
    pub id: Uuid,
    pub sort_order: i16,
    pub name: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = route_difficulties)]
pub(crate) struct NewRouteDifficultyRow<'a> {
    pub id: Uuid,
    pub sort_order: i16,
    pub name: &'a str,
}

// ---------------------------------------------------------------------------
// Boulders
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = boulders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BoulderRow {
    pub id: Uuid,
    pub name: String,
    pub mountainproject: Option<String>,
    pub area_id: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = boulders)]
pub(crate) struct NewBoulderRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub difficulty_id: Option<Uuid>,
    pub mountainproject: Option<&'a str>,
    pub area_id: Option<Uuid>,
}

// ---------------------------------------------------------------------------
// Routes and pitches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = routes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RouteRow {
    pub id: Uuid,
    pub name: String,
    pub protection_style: String,
    pub mountainproject: Option<String>,
    pub area_id: Option<Uuid>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = routes)]
pub(crate) struct NewRouteRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub protection_style: &'a str,
    pub mountainproject: Option<&'a str>,
    pub area_id: Option<Uuid>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pitches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct PitchRow {
    pub id: Uuid,
    pub route_id: Uuid,
    pub sort_order: i16,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = pitches)]
pub(crate) struct NewPitchRow {
    pub id: Uuid,
    pub route_id: Uuid,
    pub sort_order: i16,
    pub difficulty_id: Uuid,
}

// ---------------------------------------------------------------------------
// Attempts and todos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = attempts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AttemptRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub attempted_on: NaiveDate,
    pub notes: String,
    pub boulder_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    pub outcome: String,
    pub prior_knowledge: bool,
    pub protection_used: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = attempts)]
pub(crate) struct NewAttemptRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub attempted_on: NaiveDate,
    pub notes: &'a str,
    pub boulder_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    pub outcome: &'a str,
    pub prior_knowledge: bool,
    pub protection_used: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct TodoRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notes: String,
    pub protection: String,
    pub boulder_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    pub style: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub(crate) struct NewTodoRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub notes: &'a str,
    pub protection: &'a str,
    pub boulder_id: Option<Uuid>,
    pub route_id: Option<Uuid>,
    pub style: &'a str,
}
