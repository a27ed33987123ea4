use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored row of `wallet_data`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WalletSubmission {
    pub id: i32,
    pub wallet_address: String,
    pub wallet_type: Option<String>,
    pub asset: String,
    pub network: String,
    pub total_balance: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// A validated submission ready to be inserted. `id` and `timestamp` are
/// assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewWalletSubmission {
    pub wallet_address: String,
    pub wallet_type: Option<String>,
    pub asset: String,
    pub network: String,
    pub total_balance: Decimal,
}
