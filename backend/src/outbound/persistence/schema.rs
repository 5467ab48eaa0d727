//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Column names follow
//! the SQL side (`sort_order`, `attempted_on`, `outcome`); row mapping in
//! `models.rs` and the repositories translates them to domain names.

diesel::table! {
    /// Climbers known to the log.
    users (id) {
        id -> Uuid,
        /// Display name (3 to 32 characters).
        display_name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Area hierarchy; `parent_id` is null for top-level areas.
    areas (id) {
        id -> Uuid,
        name -> Varchar,
        parent_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    boulder_difficulties (id) {
        id -> Uuid,
        sort_order -> Int2,
        name -> Varchar,
    }
}

diesel::table! {
    route_difficulties (id) {
        id -> Uuid,
        sort_order -> Int2,
        name -> Varchar,
    }
}

diesel::table! {
    boulders (id) {
        id -> Uuid,
        name -> Varchar,
        difficulty_id -> Nullable<Uuid>,
        mountainproject -> Nullable<Text>,
        area_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    routes (id) {
        id -> Uuid,
        name -> Varchar,
        /// One of `sport`, `toprope`, `trad`.
        protection_style -> Varchar,
        mountainproject -> Nullable<Text>,
        area_id -> Nullable<Uuid>,
    }
}

diesel::table! {
    /// Pitches cascade with their route; `(route_id, sort_order)` is unique.
    pitches (id) {
        id -> Uuid,
        route_id -> Uuid,
        sort_order -> Int2,
        difficulty_id -> Uuid,
    }
}

diesel::table! {
    /// Exactly one of `boulder_id` / `route_id` is set
    /// (`attempt_boulder_xor_route`).
    attempts (id) {
        id -> Uuid,
        user_id -> Uuid,
        attempted_on -> Date,
        notes -> Text,
        boulder_id -> Nullable<Uuid>,
        route_id -> Nullable<Uuid>,
        outcome -> Varchar,
        prior_knowledge -> Bool,
        protection_used -> Varchar,
    }
}

diesel::table! {
    /// Exactly one of `boulder_id` / `route_id` is set
    /// (`todo_boulder_xor_route`).
    todos (id) {
        id -> Uuid,
        user_id -> Uuid,
        notes -> Text,
        protection -> Varchar,
        boulder_id -> Nullable<Uuid>,
        route_id -> Nullable<Uuid>,
        style -> Varchar,
    }
}

diesel::joinable!(boulders -> boulder_difficulties (difficulty_id));
diesel::joinable!(boulders -> areas (area_id));
diesel::joinable!(routes -> areas (area_id));
diesel::joinable!(pitches -> routes (route_id));
diesel::joinable!(pitches -> route_difficulties (difficulty_id));
diesel::joinable!(attempts -> users (user_id));
diesel::joinable!(attempts -> boulders (boulder_id));
diesel::joinable!(attempts -> routes (route_id));
diesel::joinable!(todos -> users (user_id));
diesel::joinable!(todos -> boulders (boulder_id));
diesel::joinable!(todos -> routes (route_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    areas,
    boulder_difficulties,
    route_difficulties,
    boulders,
    routes,
    pitches,
    attempts,
    todos,
);
