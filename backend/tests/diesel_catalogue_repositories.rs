//! Integration tests for the Diesel catalogue adapters against embedded PostgreSQL.
//!
//! The repositories are driven through `CatalogueService` so each case reads
//! like an API call, while raw SQL checks that the schema itself enforces
//! the protect/cascade rules and pitch ordering.

use std::sync::Arc;

use pg_embedded_setup_unpriv::TemporaryDatabase;
use postgres::{Client, NoTls};
use rstest::{fixture, rstest};
use tickle::domain::ports::{CatalogueCommand, CatalogueQuery};
use tickle::domain::{
    Area, AreaName, CatalogueService, ClimbName, Difficulty, DifficultyName, DifficultyScale,
    ErrorCode, NewBoulder, NewPitch, NewRoute, NewRouteDraft, ProtectionStyle,
};
use tickle::outbound::persistence::{
    DbPool, DieselAreaRepository, DieselBoulderRepository, DieselDifficultyRepository,
    DieselRouteRepository, PoolConfig,
};
use tokio::runtime::Runtime;
use uuid::Uuid;

mod support;

use support::{
    format_postgres_error, handle_cluster_setup_failure, provision_template_database,
    shared_cluster,
};

type Catalogue = CatalogueService<
    DieselAreaRepository,
    DieselDifficultyRepository,
    DieselBoulderRepository,
    DieselRouteRepository,
>;

struct TestContext {
    runtime: Runtime,
    catalogue: Catalogue,
    database_url: String,
    _database: TemporaryDatabase,
}

impl TestContext {
    fn client(&self) -> Client {
        Client::connect(&self.database_url, NoTls)
            .unwrap_or_else(|err| panic!("connect: {}", format_postgres_error(&err)))
    }

    fn area(&self, name: &str, parent_id: Option<Uuid>) -> Area {
        let area = Area::new(
            Uuid::new_v4(),
            AreaName::new(name).expect("valid area name"),
            parent_id,
        )
        .expect("valid area");
        self.runtime
            .block_on(self.catalogue.create_area(area))
            .expect("area stored")
    }

    fn grade(&self, scale: DifficultyScale, order: u16, name: &str) -> Difficulty {
        let grade = Difficulty::new(
            Uuid::new_v4(),
            order,
            DifficultyName::new(name).expect("valid grade name"),
        )
        .expect("valid grade");
        self.runtime
            .block_on(self.catalogue.create_difficulty(scale, grade))
            .expect("grade stored")
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = shared_cluster()?;
    let database = provision_template_database(cluster)?;
    let database_url = database.url().to_string();

    let config = PoolConfig::new(database_url.as_str())
        .with_max_size(2)
        .with_min_idle(Some(1));
    let pool = runtime
        .block_on(DbPool::new(config))
        .map_err(|err| err.to_string())?;

    let catalogue = CatalogueService::new(
        Arc::new(DieselAreaRepository::new(pool.clone())),
        Arc::new(DieselDifficultyRepository::new(pool.clone())),
        Arc::new(DieselBoulderRepository::new(pool.clone())),
        Arc::new(DieselRouteRepository::new(pool)),
    );

    Ok(TestContext {
        runtime,
        catalogue,
        database_url,
        _database: database,
    })
}

#[fixture]
fn context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => handle_cluster_setup_failure(reason),
    }
}

fn new_route(name: &str, area_id: Option<Uuid>, pitches: &[(u16, &Difficulty)]) -> NewRoute {
    NewRoute::new(NewRouteDraft {
        id: Uuid::new_v4(),
        name: ClimbName::new(name).expect("valid route name"),
        area_id,
        protection_style: ProtectionStyle::Trad,
        mountainproject: None,
        pitches: pitches
            .iter()
            .map(|(order, grade)| NewPitch {
                id: Uuid::new_v4(),
                order: *order,
                difficulty_id: grade.id(),
            })
            .collect(),
    })
    .expect("valid route")
}

#[rstest]
fn boulder_in_nested_area_round_trips(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let yosemite = ctx.area("Yosemite", None);
    let camp4 = ctx.area("Camp 4", Some(yosemite.id()));
    let v8 = ctx.grade(DifficultyScale::Boulder, 8, "V8");

    let created = ctx
        .runtime
        .block_on(ctx.catalogue.create_boulder(NewBoulder {
            id: Uuid::new_v4(),
            name: ClimbName::new("Midnight Lightning").expect("valid name"),
            area_id: Some(camp4.id()),
            difficulty_id: Some(v8.id()),
            mountainproject: None,
        }))
        .expect("boulder stored");
    assert_eq!(created.to_string(), "Midnight Lightning (V8)");

    let top_level = ctx
        .runtime
        .block_on(ctx.catalogue.list_top_level_areas())
        .expect("list areas");
    assert_eq!(top_level, vec![yosemite.clone()]);

    let parent = ctx
        .runtime
        .block_on(ctx.catalogue.area_detail(yosemite.id()))
        .expect("parent detail");
    assert_eq!(parent.children, vec![camp4.clone()]);
    assert!(parent.boulders.is_empty());

    let detail = ctx
        .runtime
        .block_on(ctx.catalogue.area_detail(camp4.id()))
        .expect("child detail");
    assert_eq!(detail.boulders, vec![created.clone()]);

    let fetched = ctx
        .runtime
        .block_on(ctx.catalogue.get_boulder(created.id()))
        .expect("boulder fetched");
    assert_eq!(fetched.difficulty(), Some(&v8));
}

#[rstest]
fn route_grade_follows_hardest_pitch(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let easy = ctx.grade(DifficultyScale::Route, 2, "5.8");
    let hard = ctx.grade(DifficultyScale::Route, 5, "5.11a");
    let mid = ctx.grade(DifficultyScale::Route, 3, "5.9");

    let created = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route(
            "Royal Arches",
            None,
            &[(3, &mid), (1, &easy), (2, &hard)],
        )))
        .expect("route stored");

    let orders: Vec<u16> = created.pitches().iter().map(|pitch| pitch.order()).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(created.difficulty(), Some(&hard));
    assert_eq!(created.to_string(), "Royal Arches (5.11a)");
}

#[rstest]
fn route_without_pitches_is_unrated(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let created = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route("Unclimbed Line", None, &[])))
        .expect("route stored");

    assert!(created.difficulty().is_none());
    assert_eq!(created.to_string(), "Unclimbed Line (unrated)");
}

#[rstest]
fn schema_rejects_repeated_pitch_order(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let grade = ctx.grade(DifficultyScale::Route, 1, "5.6");
    let route = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route("Nutcracker", None, &[(1, &grade)])))
        .expect("route stored");

    let err = ctx
        .client()
        .execute(
            "INSERT INTO pitches (id, route_id, sort_order, difficulty_id) VALUES ($1, $2, 1, $3)",
            &[&Uuid::new_v4(), &route.id(), &grade.id()],
        )
        .expect_err("second pitch at position 1 is rejected");
    let db_error = err.as_db_error().expect("database error");
    assert_eq!(db_error.constraint(), Some("pitches_route_order_key"));
}

#[rstest]
fn deleting_route_removes_only_its_pitches(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let grade = ctx.grade(DifficultyScale::Route, 4, "5.10a");
    let route = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route(
            "After Six",
            None,
            &[(1, &grade), (2, &grade)],
        )))
        .expect("route stored");
    let neighbour = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route(
            "Munginella",
            None,
            &[(1, &grade), (2, &grade), (3, &grade)],
        )))
        .expect("route stored");

    ctx.runtime
        .block_on(ctx.catalogue.delete_route(route.id()))
        .expect("route deleted");

    let remaining: i64 = ctx
        .client()
        .query_one(
            "SELECT COUNT(*) FROM pitches WHERE route_id = $1",
            &[&route.id()],
        )
        .expect("count pitches")
        .get(0);
    assert_eq!(remaining, 0);
    let err = ctx
        .runtime
        .block_on(ctx.catalogue.get_route(route.id()))
        .expect_err("route is gone");
    assert_eq!(err.code(), ErrorCode::NotFound);

    let survivor = ctx
        .runtime
        .block_on(ctx.catalogue.get_route(neighbour.id()))
        .expect("neighbour intact");
    assert_eq!(survivor, neighbour);
    assert_eq!(survivor.pitches().len(), 3);
}

#[rstest]
fn pitch_grade_is_protected(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let grade = ctx.grade(DifficultyScale::Route, 6, "5.10c");
    let route = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route(
            "Serenity Crack",
            None,
            &[(1, &grade)],
        )))
        .expect("route stored");

    let err = ctx
        .runtime
        .block_on(ctx.catalogue.delete_difficulty(DifficultyScale::Route, grade.id()))
        .expect_err("grade used by a pitch is protected");
    assert_eq!(err.code(), ErrorCode::Conflict);

    let reread = ctx
        .runtime
        .block_on(ctx.catalogue.get_route(route.id()))
        .expect("route intact");
    assert_eq!(reread, route);
    assert_eq!(reread.pitches()[0].difficulty(), &grade);
    let grades = ctx
        .runtime
        .block_on(ctx.catalogue.list_difficulties(DifficultyScale::Route))
        .expect("list grades");
    assert_eq!(grades, vec![grade]);
}

#[rstest]
fn grade_order_beats_name(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let ten_a = ctx.grade(DifficultyScale::Route, 4, "5.10a");
    let nine = ctx.grade(DifficultyScale::Route, 3, "5.9");

    let grades = ctx
        .runtime
        .block_on(ctx.catalogue.list_difficulties(DifficultyScale::Route))
        .expect("list grades");
    assert_eq!(grades, vec![nine.clone(), ten_a.clone()]);

    let route = ctx
        .runtime
        .block_on(ctx.catalogue.create_route(new_route(
            "Outer Limits",
            None,
            &[(1, &ten_a), (2, &nine)],
        )))
        .expect("route stored");
    assert_eq!(route.difficulty(), Some(&ten_a));
    assert_eq!(route.to_string(), "Outer Limits (5.10a)");
}

#[rstest]
fn top_level_areas_exclude_children(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let castle = ctx.area("Castle Crag", None);
    let arapiles = ctx.area("Arapiles", None);
    ctx.area("Bard Buttress", Some(arapiles.id()));

    let top_level = ctx
        .runtime
        .block_on(ctx.catalogue.list_top_level_areas())
        .expect("list areas");
    assert_eq!(top_level, vec![arapiles, castle]);
}

#[rstest]
fn referenced_rows_are_protected(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let parent = ctx.area("Bishop", None);
    let child = ctx.area("Buttermilks", Some(parent.id()));
    let v5 = ctx.grade(DifficultyScale::Boulder, 5, "V5");
    let iron_man = ctx
        .runtime
        .block_on(ctx.catalogue.create_boulder(NewBoulder {
            id: Uuid::new_v4(),
            name: ClimbName::new("Iron Man").expect("valid name"),
            area_id: Some(child.id()),
            difficulty_id: Some(v5.id()),
            mountainproject: None,
        }))
        .expect("boulder stored");

    let area_err = ctx
        .runtime
        .block_on(ctx.catalogue.delete_area(parent.id()))
        .expect_err("area with children is protected");
    assert_eq!(area_err.code(), ErrorCode::Conflict);

    let grade_err = ctx
        .runtime
        .block_on(ctx.catalogue.delete_difficulty(DifficultyScale::Boulder, v5.id()))
        .expect_err("assigned grade is protected");
    assert_eq!(grade_err.code(), ErrorCode::Conflict);

    let grades = ctx
        .runtime
        .block_on(ctx.catalogue.list_difficulties(DifficultyScale::Boulder))
        .expect("list grades");
    assert_eq!(grades, vec![v5]);
    let reread = ctx
        .runtime
        .block_on(ctx.catalogue.get_boulder(iron_man.id()))
        .expect("boulder intact");
    assert_eq!(reread, iron_man);
}

#[rstest]
fn grade_scales_are_separate(context: Option<TestContext>) {
    let Some(ctx) = context else {
        return;
    };
    let v2 = ctx.grade(DifficultyScale::Boulder, 2, "V2");
    let v1 = ctx.grade(DifficultyScale::Boulder, 1, "V1");
    ctx.grade(DifficultyScale::Route, 0, "5.5");

    let boulder_grades = ctx
        .runtime
        .block_on(ctx.catalogue.list_difficulties(DifficultyScale::Boulder))
        .expect("list grades");
    assert_eq!(boulder_grades, vec![v1, v2.clone()]);

    let err = ctx
        .runtime
        .block_on(ctx.catalogue.delete_difficulty(DifficultyScale::Route, v2.id()))
        .expect_err("boulder grade is not on the route scale");
    assert_eq!(err.code(), ErrorCode::NotFound);
}
