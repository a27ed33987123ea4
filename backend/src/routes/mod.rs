pub mod health;
pub mod wallet;

pub use health::*;
pub use wallet::*;

use actix_web::{HttpResponse, error::InternalError, web};
use serde::Serialize;

/// Largest accepted JSON body.
const JSON_LIMIT: usize = 100 * 1024;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl ErrorResponse {
    pub fn new(error: &'static str) -> Self {
        Self { error }
    }
}

/// Registers every route and the JSON extractor settings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(|err, _req| {
            log::debug!("Rejected request body: {}", err);
            let response =
                HttpResponse::BadRequest().json(ErrorResponse::new("Invalid request body"));
            InternalError::from_response(err, response).into()
        });

    cfg.app_data(json_config).service(index).service(
        web::scope("/api")
            .service(submit)
            .service(list_data),
    );
}
