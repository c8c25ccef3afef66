use std::{fs, path::Path};

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::{Appointment, NewAppointment, STATUS_PENDING};

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

pub fn ensure_sqlite_dir(db_url: &str) -> std::io::Result<()> {
    let path = if let Some(path) = db_url.strip_prefix("sqlite://") {
        Some(path)
    } else if let Some(path) = db_url.strip_prefix("sqlite:") {
        Some(path)
    } else {
        None
    };

    let Some(path) = path else {
        return Ok(());
    };

    let path = path.split('?').next().unwrap_or(path);
    if path == ":memory:" || path.is_empty() {
        return Ok(());
    }

    let path = path.strip_prefix("file:").unwrap_or(path);
    let db_path = Path::new(path);
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Persists a new appointment with a server-assigned id, `created_at` set
/// to the current time and status `pending`. Returns the new id.
pub async fn create_appointment(
    pool: &SqlitePool,
    new: &NewAppointment,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"INSERT INTO appointments
           (name, phone, master_id, service, date, time, comment, created_at, status)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&new.name)
    .bind(&new.phone)
    .bind(new.master_id)
    .bind(&new.service)
    .bind(&new.date)
    .bind(&new.time)
    .bind(&new.comment)
    .bind(Utc::now().to_rfc3339())
    .bind(STATUS_PENDING)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All appointments, most recent first. Ids break created_at ties so the
/// ordering is total even for bookings made within the same second.
pub async fn list_appointments(pool: &SqlitePool) -> Result<Vec<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        r#"SELECT id, name, phone, master_id, service, date, time, comment, created_at, status
           FROM appointments
           ORDER BY created_at DESC, id DESC"#,
    )
    .fetch_all(pool)
    .await
}

pub async fn fetch_appointment(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<Appointment>, sqlx::Error> {
    sqlx::query_as::<_, Appointment>(
        r#"SELECT id, name, phone, master_id, service, date, time, comment, created_at, status
           FROM appointments
           WHERE id = ?
           LIMIT 1"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Overwrites the status of an appointment. Returns false when no row with
/// that id exists. The new value is stored as given; there is no check
/// against the recognized status set.
pub async fn update_status(
    pool: &SqlitePool,
    id: i64,
    status: &str,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE appointments SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

#[cfg(test)]
pub fn sample_booking(name: &str) -> NewAppointment {
    NewAppointment {
        name: name.to_string(),
        phone: "+79001234567".to_string(),
        master_id: 1,
        service: "Мужская стрижка".to_string(),
        date: "2024-05-01".to_string(),
        time: "10:00".to_string(),
        comment: String::new(),
    }
}
