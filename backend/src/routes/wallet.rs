use actix_web::{HttpResponse, Result, web};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{NewWalletSubmission, Store};

use crate::routes::ErrorResponse;

/// Text fields are kept as raw JSON so that falsy non-string values (`0`,
/// `false`) are reported as missing rather than as a malformed body.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequest {
    pub wallet_address: Option<Value>,
    pub wallet_type: Option<Value>,
    pub asset: Option<Value>,
    pub network: Option<Value>,
    pub total_balance: Option<Decimal>,
}

#[derive(Debug, thiserror::Error)]
#[error("missing required fields")]
pub struct MissingFields;

/// `None` for falsy values (`null`, `false`, `0`, `""`), otherwise the value as text.
fn truthy_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(into_text(other)),
    }
}

fn into_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

impl SubmitRequest {
    /// Text fields must be truthy. `total_balance` only has to be present, so a
    /// zero balance is accepted.
    pub fn into_submission(self) -> Result<NewWalletSubmission, MissingFields> {
        match (
            truthy_text(self.wallet_address),
            truthy_text(self.asset),
            truthy_text(self.network),
            self.total_balance,
        ) {
            (Some(wallet_address), Some(asset), Some(network), Some(total_balance)) => {
                Ok(NewWalletSubmission {
                    wallet_address,
                    wallet_type: self
                        .wallet_type
                        .filter(|v| !v.is_null())
                        .map(into_text),
                    asset,
                    network,
                    total_balance,
                })
            }
            _ => Err(MissingFields),
        }
    }
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub id: i32,
}

#[actix_web::post("/submit")]
pub async fn submit(
    store: web::Data<Store>,
    req: web::Json<SubmitRequest>,
) -> Result<HttpResponse> {
    let submission = match req.into_inner().into_submission() {
        Ok(submission) => submission,
        Err(_) => {
            return Ok(
                HttpResponse::BadRequest().json(ErrorResponse::new("Missing required fields"))
            );
        }
    };

    match store.create_wallet_submission(&submission).await {
        Ok(id) => Ok(HttpResponse::Ok().json(SubmitResponse {
            message: "Data saved successfully",
            id,
        })),
        Err(e) => {
            log::error!("Insert error: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to save data")))
        }
    }
}

#[actix_web::get("/data")]
pub async fn list_data(store: web::Data<Store>) -> Result<HttpResponse> {
    match store.list_wallet_submissions().await {
        Ok(rows) => Ok(HttpResponse::Ok().json(rows)),
        Err(e) => {
            log::error!("Fetch error: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch data")))
        }
    }
}
