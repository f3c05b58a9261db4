use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Account not found: {0}")]
    AccountNotFound(Uuid),
    #[error("Investment not found: {0}")]
    InvestmentNotFound(Uuid),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Investment {id} was already sold on {sold_at}")]
    InvestmentAlreadySold { id: Uuid, sold_at: DateTime<Utc> },
}

pub type LedgerResult<T> = Result<T, LedgerError>;
