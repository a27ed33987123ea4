pub mod models;
pub mod schema;
pub mod wallet;

use sqlx::PgPool;

pub use models::wallet_submission::{NewWalletSubmission, WalletSubmission};
pub use wallet::WalletError;

pub struct Store {
    pub pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
