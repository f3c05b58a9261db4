#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use finances::{Client, Clock, FixedClock, Investment};

/// Builds a UTC instant, panicking on impossible dates.
pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid test timestamp")
}

pub fn clock_at(year: i32, month: u32, day: u32) -> FixedClock {
    FixedClock::new(utc(year, month, day, 12))
}

/// Ana's ledger: one checking account with a deposit and a withdrawal, plus one stock position.
pub fn sample_client(clock: &FixedClock) -> Client {
    let mut client = Client::new("Ana");
    let checking = client.add_account("Checking");
    checking.add_transaction_with_clock(clock, 1000.0, "Deposit", "Salary");
    checking.add_transaction_with_clock(clock, -200.0, "Saída", "Groceries");
    client.add_investment(Investment::purchased_at("Ações", 5000.0, 0.05, clock.now()));
    client
}
