use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::Config;

/// A single monetary movement recorded on an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    timestamp: DateTime<Utc>,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    pub(crate) fn new(
        amount: f64,
        category: impl Into<String>,
        description: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            timestamp,
            category: category.into(),
            description: description.into(),
        }
    }

    /// Instant the transaction was recorded. Fixed at creation.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Overwrites the fields present in `patch`, leaving the rest untouched.
    pub fn update(&mut self, patch: TransactionPatch) {
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }

    /// Renders the transaction line using the configured currency settings.
    pub fn render(&self, config: &Config) -> String {
        format!(
            "Transação: {} {} ({})",
            self.description,
            config.format_amount(self.amount),
            self.category
        )
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Config::default()))
    }
}

/// Partial update for a [`Transaction`]; `None` fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl TransactionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.description.is_none()
    }
}
