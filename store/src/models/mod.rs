pub mod wallet_submission;
