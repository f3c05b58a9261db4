use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::LedgerError;
use crate::time::{Clock, SystemClock};

use super::transaction::{Transaction, TransactionPatch};

/// Represents a financial account that holds an append-only transaction history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    transactions: Vec<Transaction>,
}

impl Account {
    /// Creates a new account with no history and therefore a zero balance.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            transactions: Vec::new(),
        }
    }

    /// Sum of every recorded amount, in insertion order.
    pub fn balance(&self) -> f64 {
        self.transactions
            .iter()
            .fold(0.0, |total, txn| total + txn.amount)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Records a transaction stamped with the current system time.
    pub fn add_transaction(
        &mut self,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Transaction {
        self.add_transaction_with_clock(&SystemClock, amount, category, description)
    }

    pub fn add_transaction_with_clock(
        &mut self,
        clock: &dyn Clock,
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> &mut Transaction {
        let transaction = Transaction::new(amount, category, description, clock.now());
        tracing::debug!(
            account = %self.name,
            transaction = %transaction.id,
            amount,
            category = %transaction.category,
            "recording transaction"
        );
        let index = self.transactions.len();
        self.transactions.push(transaction);
        &mut self.transactions[index]
    }

    /// Applies `patch` to the transaction identified by `id`.
    pub fn update_transaction(
        &mut self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> Result<&Transaction, LedgerError> {
        let txn = self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or(LedgerError::TransactionNotFound(id))?;
        tracing::debug!(transaction = %id, ?patch, "updating transaction");
        txn.update(patch);
        Ok(&*txn)
    }

    /// Returns the transactions matching every criterion set on `filter`, in insertion order.
    pub fn get_transactions(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|txn| filter.matches(txn))
            .collect()
    }
}

/// Criteria for [`Account::get_transactions`]. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub category: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps transactions recorded at or after `start`.
    pub fn since(mut self, start: DateTime<Utc>) -> Self {
        self.start = Some(start);
        self
    }

    /// Keeps transactions recorded at or before `end`.
    pub fn until(mut self, end: DateTime<Utc>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, txn: &Transaction) -> bool {
        let at = txn.timestamp();
        if let Some(start) = self.start {
            if at < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if at > end {
                return false;
            }
        }
        match &self.category {
            Some(category) => txn.category == *category,
            None => true,
        }
    }
}
