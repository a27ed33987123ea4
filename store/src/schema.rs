use crate::Store;
use crate::wallet::WalletError;

/// DDL for the `wallet_data` table. Safe to run on every start.
pub const CREATE_WALLET_DATA_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS wallet_data (
        id SERIAL PRIMARY KEY,
        wallet_address VARCHAR(255) NOT NULL,
        wallet_type VARCHAR(50),
        asset VARCHAR(50) NOT NULL,
        network VARCHAR(50) NOT NULL,
        total_balance NUMERIC(26, 8) NOT NULL,
        "timestamp" TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

impl Store {
    pub async fn ensure_schema(&self) -> Result<(), WalletError> {
        sqlx::query(CREATE_WALLET_DATA_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
