use std::sync::Arc;

use sqlx::SqlitePool;

use crate::catalog::Catalog;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub catalog: Arc<Catalog>,
}
