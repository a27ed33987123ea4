use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web};
use log::{error, info};
use sqlx::postgres::PgPoolOptions;
use store::Store;

use crate::config::{Config, DatabaseConfig};
use crate::routes;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Opens the database pool. There is no retry: any error is fatal to startup.
pub async fn connect(
    database: &DatabaseConfig,
    pool_options: PgPoolOptions,
) -> Result<Store, StartupError> {
    let pool = pool_options
        .connect_with(database.connect_options())
        .await
        .map_err(StartupError::Connect)?;

    info!(
        "Connected to database {} on {}:{}",
        database.name, database.host, database.port
    );
    Ok(Store::new(pool))
}

/// Creates `wallet_data` if needed. A failure is logged and startup continues.
pub async fn prepare_schema(store: &Store) {
    match store.ensure_schema().await {
        Ok(()) => info!("Table wallet_data ready"),
        Err(e) => error!("Error creating table: {}", e),
    }
}

/// Connects, prepares the schema and serves until the server is stopped. The
/// listener is only bound once the connection has succeeded.
pub async fn run(config: Config, pool_options: PgPoolOptions) -> Result<(), StartupError> {
    let store = connect(&config.database, pool_options).await?;
    prepare_schema(&store).await;

    let store_data = web::Data::new(store);

    info!("Server running on port {}", config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .app_data(store_data.clone())
            .configure(routes::configure)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await?;

    Ok(())
}
