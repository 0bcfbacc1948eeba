use std::sync::{Mutex, MutexGuard};

use actix_web::{
    get,
    http::{header, StatusCode},
    post,
    web::{self, Bytes},
    HttpResponse, Responder, ResponseError,
};
use roster::{
    controller::roster::RosterController,
    model::{
        form::PersonForm,
        person::Person,
        response::{RosterAction, RosterResponse},
        validation::ModelState,
    },
    store::{memory::InMemoryPersonStore, StoreError},
};
use serde::Serialize;
use thiserror::Error;

const ROSTER_PATH: &str = "/rookies";

/// Shared across every actix worker, the mutex is what serialises access to the store
pub type RosterState = Mutex<RosterController<InMemoryPersonStore>>;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Roster unavailable, a previous request panicked while holding it")]
    Poisoned,
}

// Rendered as plain text by the default `error_response`
impl ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::Store(StoreError::InvalidIndex(_)) => StatusCode::BAD_REQUEST,
            // Only here for exhaustiveness, `detail` folds this into `RosterResponse::NotFound`
            HttpError::Store(StoreError::IndexOutOfRange(_)) => StatusCode::NOT_FOUND,
            HttpError::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of a rejected create, the submitted person (if it bound) and why it was rejected
#[derive(Serialize)]
struct FormView {
    person: Option<Person>,
    errors: ModelState,
}

fn render(response: RosterResponse) -> HttpResponse {
    match response {
        RosterResponse::List(people) => HttpResponse::Ok().json(people),
        RosterResponse::Detail(person) => HttpResponse::Ok().json(person),
        RosterResponse::NotFound(message) => HttpResponse::NotFound()
            .content_type(header::ContentType::plaintext())
            .body(message),
        RosterResponse::Form {
            person,
            model_state,
        } => HttpResponse::Ok().json(FormView {
            person,
            errors: model_state,
        }),
        RosterResponse::RedirectTo(action) => HttpResponse::Found()
            .insert_header((header::LOCATION, action_path(action)))
            .finish(),
    }
}

fn action_path(action: RosterAction) -> &'static str {
    match action {
        RosterAction::List => ROSTER_PATH,
    }
}

type RosterGuard<'a> = MutexGuard<'a, RosterController<InMemoryPersonStore>>;

fn lock(roster: &RosterState) -> Result<RosterGuard<'_>, HttpError> {
    roster.lock().map_err(|_| {
        log::error!("Roster lock poisoned");
        HttpError::Poisoned
    })
}

#[get("/rookies")]
async fn list(roster: web::Data<RosterState>) -> Result<HttpResponse, HttpError> {
    let controller = lock(&roster)?;

    Ok(render(controller.list()))
}

#[get("/rookies/{index}")]
async fn detail(
    roster: web::Data<RosterState>,
    index: web::Path<i64>,
) -> Result<HttpResponse, HttpError> {
    let controller = lock(&roster)?;

    Ok(render(controller.detail(index.into_inner())?))
}

/// Binds the body before taking the lock, so slow or malformed payloads never hold up readers
#[post("/rookies")]
async fn create(roster: web::Data<RosterState>, body: Bytes) -> Result<HttpResponse, HttpError> {
    let today = chrono::Local::now().date_naive();
    let (person, model_state) = PersonForm::bind_json(&body, today);

    let mut controller = lock(&roster)?;

    Ok(render(controller.create(person, model_state)))
}

#[get("/health")]
async fn health() -> impl Responder {
    "OK"
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list)
        .service(detail)
        .service(create)
        .service(health);
}
