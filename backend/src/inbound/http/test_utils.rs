//! Test helpers for inbound HTTP components.

use actix_web::dev::ServiceResponse;
use actix_web::{App, test as actix_test, web};
use uuid::Uuid;

use crate::domain::{
    Boulder, BoulderDraft, ClimbName, Difficulty, DifficultyName, Pitch, ProtectionStyle, Route,
    RouteDraft,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mount `routes` under `/api/v1` with the given ports and send one request.
pub async fn call_api<F>(
    ports: HttpStatePorts,
    routes: F,
    req: actix_http::Request,
) -> ServiceResponse
where
    F: FnOnce(&mut web::ServiceConfig) + 'static,
{
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(ports)))
            .service(web::scope("/api/v1").configure(routes)),
    )
    .await;
    actix_test::call_service(&app, req).await
}

/// Grade with a random id.
pub fn grade(order: u16, name: &str) -> Difficulty {
    Difficulty::new(
        Uuid::new_v4(),
        order,
        DifficultyName::new(name).expect("valid grade name"),
    )
    .expect("valid grade")
}

pub fn boulder(name: &str, difficulty: Option<Difficulty>) -> Boulder {
    Boulder::new(BoulderDraft {
        id: Uuid::new_v4(),
        name: ClimbName::new(name).expect("valid climb name"),
        area_id: None,
        difficulty,
        mountainproject: None,
    })
}

/// Route whose pitches carry the given grades in order.
pub fn route(name: &str, grades: Vec<Difficulty>) -> Route {
    let pitches = grades
        .into_iter()
        .zip(1_u16..)
        .map(|(difficulty, order)| {
            Pitch::new(Uuid::new_v4(), order, difficulty).expect("valid pitch")
        })
        .collect();
    Route::new(RouteDraft {
        id: Uuid::new_v4(),
        name: ClimbName::new(name).expect("valid climb name"),
        area_id: None,
        protection_style: ProtectionStyle::Trad,
        mountainproject: None,
        pitches,
    })
    .expect("valid route")
}
