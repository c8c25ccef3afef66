use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{db, models::ApiAppointment, state::AppState};

#[derive(Deserialize)]
struct StatusPayload {
    status: Option<String>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/clients").route(web::get().to(list_clients)))
        .service(web::resource("/api/clients/{id}/status").route(web::put().to(update_status)));
}

async fn list_clients(state: web::Data<AppState>) -> HttpResponse {
    match db::list_appointments(&state.db).await {
        Ok(rows) => {
            let payload: Vec<ApiAppointment> =
                rows.into_iter().map(ApiAppointment::from).collect();
            HttpResponse::Ok().json(payload)
        }
        Err(err) => {
            log::error!("Listing appointments failed: {err}");
            HttpResponse::InternalServerError().json(json!({
                "status": "error",
                "message": err.to_string(),
            }))
        }
    }
}

/// Overwrites an appointment's status. Unlike /book, failures here carry
/// the raw error text back to the caller. A payload without a status field
/// leaves the stored value as it was and still reports success.
async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Bytes,
) -> HttpResponse {
    let id = path.into_inner();

    let payload: StatusPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => return update_error(err.to_string()),
    };

    let row = match db::fetch_appointment(&state.db, id).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            return HttpResponse::NotFound().json(json!({
                "status": "error",
                "message": format!("appointment {id} not found"),
            }))
        }
        Err(err) => return update_error(err.to_string()),
    };

    let next_status = payload.status.unwrap_or(row.status);
    match db::update_status(&state.db, id, &next_status).await {
        Ok(_) => HttpResponse::Ok().json(json!({ "status": "success" })),
        Err(err) => update_error(err.to_string()),
    }
}

fn update_error(message: String) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({
        "status": "error",
        "message": message,
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::db::{self, sample_booking};
    use crate::routes::public::{test_app, test_state};

    #[actix_web::test]
    async fn status_update_accepts_unrecognized_value() {
        let state = test_state().await;
        let app = test_app!(state);
        let id = db::create_appointment(&state.db, &sample_booking("Ivan"))
            .await
            .expect("create");

        let req = test::TestRequest::put()
            .uri(&format!("/api/clients/{id}/status"))
            .set_json(json!({ "status": "bogus" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");

        let req = test::TestRequest::get().uri("/api/clients").to_request();
        let clients: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(clients[0]["status"], "bogus");
    }

    #[actix_web::test]
    async fn status_update_for_unknown_id_is_not_found() {
        let state = test_state().await;
        let app = test_app!(state);

        let req = test::TestRequest::put()
            .uri("/api/clients/42/status")
            .set_json(json!({ "status": "confirmed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert!(db::list_appointments(&state.db)
            .await
            .expect("list")
            .is_empty());
    }

    #[actix_web::test]
    async fn status_update_without_field_keeps_current_value() {
        let state = test_state().await;
        let app = test_app!(state);
        let id = db::create_appointment(&state.db, &sample_booking("Ivan"))
            .await
            .expect("create");

        let req = test::TestRequest::put()
            .uri(&format!("/api/clients/{id}/status"))
            .set_json(json!({}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");

        let row = db::fetch_appointment(&state.db, id)
            .await
            .expect("fetch")
            .expect("row exists");
        assert_eq!(row.status, "pending");
    }

    #[actix_web::test]
    async fn status_update_with_broken_json_reports_the_parse_error() {
        let state = test_state().await;
        let app = test_app!(state);
        let id = db::create_appointment(&state.db, &sample_booking("Ivan"))
            .await
            .expect("create");

        let req = test::TestRequest::put()
            .uri(&format!("/api/clients/{id}/status"))
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn client_list_serializes_all_fields() {
        let state = test_state().await;
        let app = test_app!(state);
        db::create_appointment(&state.db, &sample_booking("Ivan"))
            .await
            .expect("create");

        let req = test::TestRequest::get().uri("/api/clients").to_request();
        let clients: Value = test::call_and_read_body_json(&app, req).await;
        let client = &clients.as_array().expect("array")[0];

        for key in [
            "id", "name", "phone", "master_id", "service", "date", "time", "comment",
            "created_at", "status",
        ] {
            assert!(client.get(key).is_some(), "missing field {key}");
        }
        let created_at = client["created_at"].as_str().expect("string timestamp");
        assert!(chrono::DateTime::parse_from_rfc3339(created_at).is_ok());
    }
}
