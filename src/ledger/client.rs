use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{LedgerError, LedgerResult};
use crate::time::{Clock, SystemClock};

use super::{account::Account, investment::Investment};

/// Owner of a set of accounts and investments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Client {
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub investments: Vec<Investment>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: Vec::new(),
            investments: Vec::new(),
        }
    }

    /// Opens a new empty account and returns it for further recording.
    pub fn add_account(&mut self, name: impl Into<String>) -> &mut Account {
        let index = self.accounts.len();
        self.accounts.push(Account::new(name));
        &mut self.accounts[index]
    }

    /// Takes ownership of `investment`. Duplicates are not checked.
    pub fn add_investment(&mut self, investment: Investment) -> Uuid {
        let id = investment.id();
        self.investments.push(investment);
        id
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    /// First account with the given name, in creation order.
    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    pub fn investment(&self, id: Uuid) -> Option<&Investment> {
        self.investments.iter().find(|investment| investment.id() == id)
    }

    pub fn active_investments(&self) -> impl Iterator<Item = &Investment> {
        self.investments.iter().filter(|investment| investment.is_active())
    }

    pub fn total_balance(&self) -> f64 {
        self.accounts
            .iter()
            .fold(0.0, |total, account| total + account.balance())
    }

    /// Current value of every investment; sold positions contribute nothing.
    pub fn investments_value(&self, clock: &dyn Clock) -> f64 {
        let now = clock.now();
        self.investments
            .iter()
            .fold(0.0, |total, investment| total + investment.value_at(now))
    }

    /// Account balances plus the current value of every investment.
    pub fn get_net_worth(&self) -> f64 {
        self.net_worth_with_clock(&SystemClock)
    }

    pub fn net_worth_with_clock(&self, clock: &dyn Clock) -> f64 {
        self.total_balance() + self.investments_value(clock)
    }

    /// Sells one of this client's investments into one of its accounts.
    pub fn sell_investment(
        &mut self,
        investment_id: Uuid,
        account_id: Uuid,
    ) -> LedgerResult<Uuid> {
        self.sell_investment_with_clock(&SystemClock, investment_id, account_id)
    }

    pub fn sell_investment_with_clock(
        &mut self,
        clock: &dyn Clock,
        investment_id: Uuid,
        account_id: Uuid,
    ) -> LedgerResult<Uuid> {
        let investment = self
            .investments
            .iter_mut()
            .find(|investment| investment.id() == investment_id)
            .ok_or(LedgerError::InvestmentNotFound(investment_id))?;
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or(LedgerError::AccountNotFound(account_id))?;
        investment.sell_with_clock(clock, account)
    }
}
