//! Forward projection of investment values to a target date.

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::ledger::{
    calendar::{compound, months_between},
    Client, Investment,
};
use crate::time::Clock;

/// Projected value of a single investment at the target date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedValue {
    pub investment_id: Uuid,
    pub kind: String,
    pub months: i32,
    pub value: f64,
}

/// Projection of every active investment a client holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub target: NaiveDate,
    pub months: i32,
    pub values: Vec<ProjectedValue>,
}

impl Projection {
    pub fn total(&self) -> f64 {
        self.values.iter().fold(0.0, |total, item| total + item.value)
    }
}

/// Calendar months from the clock's current date to `target`.
pub fn months_until(target: NaiveDate, clock: &dyn Clock) -> i32 {
    months_between(&clock.today(), &target)
}

/// Compounds the investment's initial amount over `months`.
///
/// The base is always the purchase amount, not today's value.
pub fn project_investment(investment: &Investment, months: i32) -> ProjectedValue {
    ProjectedValue {
        investment_id: investment.id(),
        kind: investment.kind().to_string(),
        months,
        value: compound(
            investment.initial_amount(),
            investment.rate_of_return(),
            months,
        ),
    }
}

/// Projects the client's active investments to `target`.
pub fn project(client: &Client, target: NaiveDate, clock: &dyn Clock) -> Projection {
    let months = months_until(target, clock);
    tracing::debug!(client = %client.name, %target, months, "projecting investments");
    Projection {
        target,
        months,
        values: client
            .active_investments()
            .map(|investment| project_investment(investment, months))
            .collect(),
    }
}
