use dotenv::dotenv;
use log::error;
use sqlx::postgres::PgPoolOptions;
use std::process;

mod config;
mod routes;
mod startup;

use config::Config;

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = startup::run(config, PgPoolOptions::new()).await {
        error!("{}", e);
        process::exit(1);
    }
}
