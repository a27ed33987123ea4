use crate::Store;
use crate::models::wallet_submission::{NewWalletSubmission, WalletSubmission};

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl Store {
    /// Inserts a submission and returns the id assigned to it.
    pub async fn create_wallet_submission(
        &self,
        submission: &NewWalletSubmission,
    ) -> Result<i32, WalletError> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO wallet_data (wallet_address, wallet_type, asset, network, total_balance)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&submission.wallet_address)
        .bind(&submission.wallet_type)
        .bind(&submission.asset)
        .bind(&submission.network)
        .bind(submission.total_balance)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Returns every stored submission, most recent first.
    pub async fn list_wallet_submissions(&self) -> Result<Vec<WalletSubmission>, WalletError> {
        let rows = sqlx::query_as::<_, WalletSubmission>(
            r#"
            SELECT id, wallet_address, wallet_type, asset, network, total_balance, "timestamp"
            FROM wallet_data
            ORDER BY "timestamp" DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
