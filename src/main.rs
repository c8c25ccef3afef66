mod catalog;
mod config;
mod db;
mod models;
mod routes;
mod state;
mod templates;

use std::str::FromStr;
use std::sync::Arc;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::{catalog::Catalog, config::Config, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = run().await {
        eprintln!("Startup error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    )
    .init();

    if config.secret_key_is_default() {
        log::warn!("SECRET_KEY not set. Using the insecure default. Set SECRET_KEY in production.");
    }

    db::ensure_sqlite_dir(&config.database_url)?;

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;

    db::run_migrations(&pool).await?;

    let state = AppState {
        db: pool.clone(),
        catalog: Arc::new(Catalog::load()),
    };

    let address = format!("0.0.0.0:{}", config.port);
    log::info!("Starting barbershop booking on http://{address}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", "./static").prefer_utf8(true))
            .configure(routes::public::configure)
            .configure(routes::admin::configure)
            .configure(routes::api::configure)
    })
    .bind(address)?
    .run()
    .await?;

    Ok(())
}
