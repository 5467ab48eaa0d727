//! Tests for the catalogue service.

use std::sync::Arc;

use rstest::rstest;
use uuid::Uuid;

use super::*;
use crate::domain::ports::{
    MockAreaRepository, MockBoulderRepository, MockDifficultyRepository, MockRouteRepository,
    RepositoryError,
};
use crate::domain::{
    AreaName, BoulderDraft, ClimbName, DifficultyName, ErrorCode, NewPitch, NewRouteDraft,
    Pitch, ProtectionStyle, RouteDraft,
};

type TestService = CatalogueService<
    MockAreaRepository,
    MockDifficultyRepository,
    MockBoulderRepository,
    MockRouteRepository,
>;

struct Mocks {
    areas: MockAreaRepository,
    difficulties: MockDifficultyRepository,
    boulders: MockBoulderRepository,
    routes: MockRouteRepository,
}

impl Mocks {
    fn new() -> Self {
        Self {
            areas: MockAreaRepository::new(),
            difficulties: MockDifficultyRepository::new(),
            boulders: MockBoulderRepository::new(),
            routes: MockRouteRepository::new(),
        }
    }

    fn into_service(self) -> TestService {
        CatalogueService::new(
            Arc::new(self.areas),
            Arc::new(self.difficulties),
            Arc::new(self.boulders),
            Arc::new(self.routes),
        )
    }
}

fn area(name: &str, parent_id: Option<Uuid>) -> Area {
    Area::new(
        Uuid::new_v4(),
        AreaName::new(name).expect("valid area name"),
        parent_id,
    )
    .expect("valid area")
}

fn grade(order: u16, name: &str) -> Difficulty {
    Difficulty::new(
        Uuid::new_v4(),
        order,
        DifficultyName::new(name).expect("valid grade name"),
    )
    .expect("valid grade")
}

fn boulder(id: Uuid, area_id: Option<Uuid>) -> Boulder {
    Boulder::new(BoulderDraft {
        id,
        name: ClimbName::new("Midnight Lightning").expect("valid name"),
        area_id,
        difficulty: Some(grade(8, "V8")),
        mountainproject: None,
    })
}

#[tokio::test]
async fn area_detail_collects_children_and_climbs() {
    let root = area("Yosemite", None);
    let root_id = root.id();
    let child = area("Camp 4", Some(root_id));
    let placed = boulder(Uuid::new_v4(), Some(root_id));

    let mut mocks = Mocks::new();
    let found = root.clone();
    mocks
        .areas
        .expect_find_by_id()
        .withf(move |id| *id == root_id)
        .return_once(move |_| Ok(Some(found)));
    let children = vec![child.clone()];
    mocks
        .areas
        .expect_list_children()
        .return_once(move |_| Ok(children));
    let boulders = vec![placed.clone()];
    mocks
        .boulders
        .expect_list_in_area()
        .return_once(move |_| Ok(boulders));
    mocks
        .routes
        .expect_list_in_area()
        .return_once(|_| Ok(Vec::new()));

    let detail = mocks
        .into_service()
        .area_detail(root_id)
        .await
        .expect("detail succeeds");

    assert_eq!(detail.area, root);
    assert_eq!(detail.children, vec![child]);
    assert_eq!(detail.boulders, vec![placed]);
    assert!(detail.routes.is_empty());
}

#[tokio::test]
async fn area_detail_reports_unknown_area() {
    let mut mocks = Mocks::new();
    mocks.areas.expect_find_by_id().return_once(|_| Ok(None));
    mocks.areas.expect_list_children().times(0);

    let error = mocks
        .into_service()
        .area_detail(Uuid::new_v4())
        .await
        .expect_err("unknown area");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn create_boulder_returns_stored_boulder() {
    let id = Uuid::new_v4();
    let stored = boulder(id, None);
    let request = NewBoulder {
        id,
        name: ClimbName::new("Midnight Lightning").expect("valid name"),
        area_id: None,
        difficulty_id: stored.difficulty().map(Difficulty::id),
        mountainproject: None,
    };

    let mut mocks = Mocks::new();
    mocks
        .boulders
        .expect_create()
        .withf(move |new| new.id == id)
        .times(1)
        .return_once(|_| Ok(()));
    let found = stored.clone();
    mocks
        .boulders
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(found)));

    let created = mocks
        .into_service()
        .create_boulder(request)
        .await
        .expect("create succeeds");

    assert_eq!(created, stored);
    assert_eq!(created.to_string(), "Midnight Lightning (V8)");
}

#[tokio::test]
async fn create_route_reads_back_derived_grade() {
    let easy = grade(2, "5.8");
    let hard = grade(5, "5.10d");
    let route_id = Uuid::new_v4();
    let request = NewRoute::new(NewRouteDraft {
        id: route_id,
        name: ClimbName::new("Royal Arches").expect("valid name"),
        area_id: None,
        protection_style: ProtectionStyle::Trad,
        mountainproject: None,
        pitches: vec![
            NewPitch {
                id: Uuid::new_v4(),
                order: 1,
                difficulty_id: easy.id(),
            },
            NewPitch {
                id: Uuid::new_v4(),
                order: 2,
                difficulty_id: hard.id(),
            },
        ],
    })
    .expect("valid route");
    let stored = Route::new(RouteDraft {
        id: route_id,
        name: ClimbName::new("Royal Arches").expect("valid name"),
        area_id: None,
        protection_style: ProtectionStyle::Trad,
        mountainproject: None,
        pitches: vec![
            Pitch::new(Uuid::new_v4(), 1, easy).expect("valid pitch"),
            Pitch::new(Uuid::new_v4(), 2, hard).expect("valid pitch"),
        ],
    })
    .expect("valid route");

    let mut mocks = Mocks::new();
    mocks.routes.expect_create().times(1).return_once(|_| Ok(()));
    let found = stored.clone();
    mocks
        .routes
        .expect_find_by_id()
        .return_once(move |_| Ok(Some(found)));

    let created = mocks
        .into_service()
        .create_route(request)
        .await
        .expect("create succeeds");

    assert_eq!(created.to_string(), "Royal Arches (5.10d)");
}

#[rstest]
#[case(RepositoryError::referenced("boulder has attempts"), ErrorCode::Conflict)]
#[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::query("broken"), ErrorCode::InternalError)]
#[tokio::test]
async fn delete_boulder_maps_repository_errors(
    #[case] failure: RepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut mocks = Mocks::new();
    mocks
        .boulders
        .expect_delete()
        .return_once(move |_| Err(failure));

    let error = mocks
        .into_service()
        .delete_boulder(Uuid::new_v4())
        .await
        .expect_err("delete fails");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn delete_of_unknown_route_is_not_found() {
    let mut mocks = Mocks::new();
    mocks.routes.expect_delete().return_once(|_| Ok(false));

    let error = mocks
        .into_service()
        .delete_route(Uuid::new_v4())
        .await
        .expect_err("nothing deleted");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_difficulty_succeeds_when_row_removed() {
    let id = Uuid::new_v4();
    let mut mocks = Mocks::new();
    mocks
        .difficulties
        .expect_delete()
        .withf(move |scale, candidate| *scale == DifficultyScale::Route && *candidate == id)
        .return_once(|_, _| Ok(true));

    mocks
        .into_service()
        .delete_difficulty(DifficultyScale::Route, id)
        .await
        .expect("delete succeeds");
}

#[tokio::test]
async fn list_difficulties_passes_scale_through() {
    let grades = vec![grade(0, "V0"), grade(1, "V1")];
    let expected = grades.clone();
    let mut mocks = Mocks::new();
    mocks
        .difficulties
        .expect_list()
        .withf(|scale| *scale == DifficultyScale::Boulder)
        .return_once(move |_| Ok(grades));

    let listed = mocks
        .into_service()
        .list_difficulties(DifficultyScale::Boulder)
        .await
        .expect("list succeeds");

    assert_eq!(listed, expected);
}

#[tokio::test]
async fn create_area_surfaces_missing_parent_as_invalid_request() {
    let mut mocks = Mocks::new();
    mocks
        .areas
        .expect_create()
        .return_once(|_| Err(RepositoryError::missing_reference("parent area does not exist")));

    let error = mocks
        .into_service()
        .create_area(area("Columbia Boulder", Some(Uuid::new_v4())))
        .await
        .expect_err("missing parent");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}
