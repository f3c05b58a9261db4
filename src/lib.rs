#![doc(test(attr(deny(warnings))))]

//! Personal finance ledger: clients own accounts with dated transactions and
//! investments that grow by a fixed monthly rate. Net worth and text reports,
//! including forward projections, are derived from that model.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod projection;
pub mod report;
pub mod time;
pub mod utils;

pub use config::Config;
pub use errors::{LedgerError, LedgerResult};
pub use ledger::{
    Account, Client, Investment, InvestmentStatus, Transaction, TransactionFilter,
    TransactionPatch,
};
pub use report::{future_value_report, generate_report};
pub use time::{Clock, FixedClock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finances tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
