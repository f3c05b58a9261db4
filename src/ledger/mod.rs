//! Ledger domain models: clients, accounts, transactions and investments.

pub mod account;
pub mod calendar;
pub mod client;
pub mod investment;
pub mod transaction;

pub use account::{Account, TransactionFilter};
pub use client::Client;
pub use investment::{Investment, InvestmentStatus, SALE_CATEGORY};
pub use transaction::{Transaction, TransactionPatch};
