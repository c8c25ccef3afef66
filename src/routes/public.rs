use actix_web::{web, HttpResponse};
use askama::Template;
use serde::Deserialize;
use serde_json::json;

use crate::{
    catalog::{Master, Service},
    db,
    models::NewAppointment,
    state::AppState,
    templates::render,
};

const BOOKING_SUCCESS_MESSAGE: &str =
    "Запись успешно создана! Мы свяжемся с вами по указанному номеру телефона для подтверждения.";
const BOOKING_ERROR_MESSAGE: &str =
    "Произошла ошибка при создании записи. Попробуйте еще раз.";

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    masters: Vec<Master>,
    services: Vec<Service>,
}

#[derive(Deserialize)]
struct BookingPayload {
    name: String,
    phone: String,
    master_id: i64,
    service: String,
    date: String,
    time: String,
    comment: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/book").route(web::post().to(book)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

async fn home(state: web::Data<AppState>) -> HttpResponse {
    render(HomeTemplate {
        masters: state.catalog.masters.clone(),
        services: state.catalog.services.clone(),
    })
}

/// Creates an appointment from the booking form. Any malformed payload
/// (missing field, non-numeric master_id, broken JSON) and any store
/// failure collapse into the same generic error envelope; the response
/// never names the offending field.
async fn book(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
    let payload: BookingPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            log::warn!("Rejected booking payload: {err}");
            return booking_error();
        }
    };

    let new = NewAppointment {
        name: payload.name,
        phone: payload.phone,
        master_id: payload.master_id,
        service: payload.service,
        date: payload.date,
        time: payload.time,
        comment: payload.comment.unwrap_or_default(),
    };

    match db::create_appointment(&state.db, &new).await {
        Ok(booking_id) => HttpResponse::Ok().json(json!({
            "status": "success",
            "message": BOOKING_SUCCESS_MESSAGE,
            "booking_id": booking_id,
        })),
        Err(err) => {
            log::error!("Booking insert failed: {err}");
            booking_error()
        }
    }
}

fn booking_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "status": "error",
        "message": BOOKING_ERROR_MESSAGE,
    }))
}

#[cfg(test)]
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(crate::routes::public::configure)
                .configure(crate::routes::api::configure),
        )
        .await
    };
}

#[cfg(test)]
pub(crate) use test_app;

#[cfg(test)]
pub(crate) async fn test_state() -> AppState {
    AppState {
        db: db::test_pool().await,
        catalog: std::sync::Arc::new(crate::catalog::Catalog::load()),
    }
}
