use serde::Serialize;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

/// The four recognized statuses. The update endpoint does not enforce
/// membership; this list drives the admin page's status picker.
pub const STATUSES: [&str; 4] = [
    STATUS_PENDING,
    STATUS_CONFIRMED,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// A stored booking, as read back from the appointments table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub master_id: i64,
    pub service: String,
    pub date: String,
    pub time: String,
    pub comment: String,
    pub created_at: String,
    pub status: String,
}

/// Fields supplied by the booking endpoint; id, created_at and status are
/// assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub name: String,
    pub phone: String,
    pub master_id: i64,
    pub service: String,
    pub date: String,
    pub time: String,
    pub comment: String,
}

/// Wire representation served by /api/clients, kept separate from the
/// stored row so the JSON shape is explicit.
#[derive(Debug, Serialize)]
pub struct ApiAppointment {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub master_id: i64,
    pub service: String,
    pub date: String,
    pub time: String,
    pub comment: String,
    pub created_at: String,
    pub status: String,
}

impl From<Appointment> for ApiAppointment {
    fn from(row: Appointment) -> Self {
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
        }
    }
}
