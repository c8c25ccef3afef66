use actix_web::{web, HttpResponse};
use askama::Template;

use crate::{
    catalog::Master,
    db,
    models::{Appointment, STATUSES},
    state::AppState,
    templates::render,
};

#[derive(Clone, Debug)]
struct StatusOption {
    value: &'static str,
    selected: bool,
}

#[derive(Clone, Debug)]
struct AppointmentView {
    id: i64,
    name: String,
    phone: String,
    master_id: i64,
    service: String,
    date: String,
    time: String,
    comment: String,
    created_at: String,
    status: String,
    statuses: Vec<StatusOption>,
}

impl From<Appointment> for AppointmentView {
    fn from(row: Appointment) -> Self {
        let statuses = STATUSES
            .into_iter()
            .map(|value| StatusOption {
                value,
                selected: row.status == value,
            })
            .collect();
        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            master_id: row.master_id,
            service: row.service,
            date: row.date,
            time: row.time,
            comment: row.comment,
            created_at: row.created_at,
            status: row.status,
            statuses,
        }
    }
}

#[derive(Template)]
#[template(path = "admin.html")]
struct AdminTemplate {
    appointments: Vec<AppointmentView>,
    masters: Vec<Master>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/admin").route(web::get().to(admin)));
}

async fn admin(state: web::Data<AppState>) -> HttpResponse {
    let appointments = match db::list_appointments(&state.db).await {
        Ok(rows) => rows.into_iter().map(AppointmentView::from).collect(),
        Err(err) => {
            log::error!("Loading appointments for admin page failed: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    render(AdminTemplate {
        appointments,
        masters: state.catalog.masters.clone(),
    })
}
