use actix_web::{HttpResponse, Result};

#[actix_web::get("/")]
pub async fn index() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Backend API is running"))
}
