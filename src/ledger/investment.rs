use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, LedgerResult};
use crate::time::{Clock, SystemClock};

use super::account::Account;
use super::calendar::{compound, months_between};

pub const SALE_CATEGORY: &str = "Investment";

/// A position that grows by a fixed monthly rate from its purchase date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    id: Uuid,
    kind: String,
    initial_amount: f64,
    purchased_at: DateTime<Utc>,
    rate_of_return: f64,
    #[serde(default)]
    status: InvestmentStatus,
}

/// Lifecycle of an investment. Sold positions keep their proceeds for reporting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub enum InvestmentStatus {
    #[default]
    Active,
    Sold {
        sold_at: DateTime<Utc>,
        proceeds: f64,
    },
}

impl Investment {
    /// Creates an investment purchased now.
    pub fn new(kind: impl Into<String>, initial_amount: f64, rate_of_return: f64) -> Self {
        Self::purchased_at(kind, initial_amount, rate_of_return, SystemClock.now())
    }

    pub fn purchased_at(
        kind: impl Into<String>,
        initial_amount: f64,
        rate_of_return: f64,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: kind.into(),
            initial_amount,
            purchased_at,
            rate_of_return,
            status: InvestmentStatus::Active,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn initial_amount(&self) -> f64 {
        self.initial_amount
    }

    pub fn purchase_timestamp(&self) -> DateTime<Utc> {
        self.purchased_at
    }

    /// Monthly rate of return.
    pub fn rate_of_return(&self) -> f64 {
        self.rate_of_return
    }

    pub fn status(&self) -> InvestmentStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        matches!(self.status, InvestmentStatus::Active)
    }

    /// Calendar months between purchase and `now`; the day of month does not count.
    pub fn months_held(&self, now: DateTime<Utc>) -> i32 {
        months_between(&self.purchased_at, &now)
    }

    /// Value at `now`: the initial amount compounded once per elapsed calendar month.
    /// A sold investment is worth nothing; its proceeds live in the credited account.
    pub fn value_at(&self, now: DateTime<Utc>) -> f64 {
        match self.status {
            InvestmentStatus::Active => compound(
                self.initial_amount,
                self.rate_of_return,
                self.months_held(now),
            ),
            InvestmentStatus::Sold { .. } => 0.0,
        }
    }

    pub fn calculate_value(&self) -> f64 {
        self.calculate_value_with_clock(&SystemClock)
    }

    pub fn calculate_value_with_clock(&self, clock: &dyn Clock) -> f64 {
        self.value_at(clock.now())
    }

    /// Liquidates the investment into `account` at its current value.
    ///
    /// Returns the id of the credit transaction. Fails without touching the
    /// account when the investment was already sold.
    pub fn sell(&mut self, account: &mut Account) -> LedgerResult<Uuid> {
        self.sell_with_clock(&SystemClock, account)
    }

    pub fn sell_with_clock(
        &mut self,
        clock: &dyn Clock,
        account: &mut Account,
    ) -> LedgerResult<Uuid> {
        if let InvestmentStatus::Sold { sold_at, .. } = self.status {
            tracing::warn!(investment = %self.id, %sold_at, "investment already sold");
            return Err(LedgerError::InvestmentAlreadySold {
                id: self.id,
                sold_at,
            });
        }
        let now = clock.now();
        let value = self.value_at(now);
        let description = format!("Sold {}", self.kind);
        let transaction_id = account
            .add_transaction_with_clock(clock, value, SALE_CATEGORY, description)
            .id;
        self.status = InvestmentStatus::Sold {
            sold_at: now,
            proceeds: value,
        };
        tracing::info!(
            investment = %self.id,
            kind = %self.kind,
            account = %account.name,
            proceeds = value,
            "investment sold"
        );
        Ok(transaction_id)
    }
}
