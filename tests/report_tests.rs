mod common;

use chrono::{Months, NaiveDate};
use common::{clock_at, sample_client};
use finances::{
    future_value_report, generate_report,
    report::{future_value_report_with, generate_report_with},
    Client, Clock, Config, Investment,
};
use regex::Regex;

#[test]
fn checking_scenario_reports_balance() {
    let mut client = Client::new("Ana");
    let checking = client.add_account("Checking");
    checking.add_transaction(1000.0, "Deposit", "");
    checking.add_transaction(-200.0, "Saída", "");
    assert_eq!(checking.balance(), 800.0);

    let report = generate_report(&client);
    assert!(report.contains("R$ 800.00"), "report was:\n{report}");
    assert!(report.contains("Transação:  R$ -200.00 (Saída)"));
}

#[test]
fn report_names_client_accounts_and_total() {
    let clock = clock_at(2025, 3, 15);
    let client = sample_client(&clock);
    let report = generate_report_with(&client, &clock, &Config::default());

    assert!(report.starts_with("Relatório Financeiro para Ana\n"));
    assert!(report.contains("- Checking: R$ 800.00\n"));
    assert!(report.contains("Investimentos:\n- Ações: R$ 5000.00\n"));
    assert!(report.contains("Patrimônio Total: R$ 5800.00\n"));
}

#[test]
fn report_lists_transactions_in_recording_order() {
    let clock = clock_at(2025, 3, 15);
    let client = sample_client(&clock);
    let report = generate_report_with(&client, &clock, &Config::default());

    let line = Regex::new(r"(?m)^    Transação: (.*) R\$ (-?\d+\.\d{2}) \((.+)\)$").expect("regex");
    let rows: Vec<(String, String)> = line
        .captures_iter(&report)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Salary".to_string(), "1000.00".to_string()),
            ("Groceries".to_string(), "-200.00".to_string()),
        ]
    );
}

#[test]
fn future_report_projects_twelve_months_ahead() {
    let clock = clock_at(2025, 3, 15);
    let client = sample_client(&clock);
    let target = NaiveDate::from_ymd_opt(2026, 3, 1).expect("date");

    let report = future_value_report_with(&client, target, &clock, &Config::default());
    let expected = format!("R$ {:.2}", 5000.0 * 1.05f64.powi(12));
    assert!(report.starts_with("Projeção de Investimentos para 01/03/2026:\n"));
    assert!(report.contains(&format!("- Ações: {expected}\n")), "report was:\n{report}");
}

#[test]
fn future_report_compounds_from_initial_amount_not_current_value() {
    let purchase = clock_at(2024, 3, 15);
    let mut client = Client::new("Ana");
    client.add_investment(Investment::purchased_at("Ações", 5000.0, 0.05, purchase.now()));

    let today = clock_at(2025, 3, 15);
    let target = NaiveDate::from_ymd_opt(2025, 9, 30).expect("date");
    let report = future_value_report_with(&client, target, &today, &Config::default());
    let from_initial = format!("- Ações: R$ {:.2}\n", 5000.0 * 1.05f64.powi(6));
    assert!(report.ends_with(&from_initial), "report was:\n{report}");
}

#[test]
fn future_report_uses_month_granularity() {
    let clock = clock_at(2025, 1, 31);
    let mut client = Client::new("Ana");
    client.add_investment(Investment::purchased_at("Ações", 5000.0, 0.05, clock.now()));
    let target = clock
        .today()
        .checked_add_months(Months::new(12))
        .expect("date in range");

    let report = future_value_report_with(&client, target, &clock, &Config::default());
    let header = format!("Projeção de Investimentos para {}:\n", target.format("%d/%m/%Y"));
    assert!(report.starts_with(&header));

    let value = Regex::new(r"- Ações: R\$ (\d+\.\d{2})\n$").expect("regex");
    let caps = value.captures(&report).expect("projection line");
    let projected: f64 = caps[1].parse().expect("number");
    assert!((projected - 5000.0 * 1.05f64.powi(12)).abs() < 0.01);
}

#[test]
fn future_report_with_system_clock_renders_target_header() {
    let mut client = Client::new("Ana");
    client.add_investment(Investment::new("Ações", 5000.0, 0.05));
    let target = NaiveDate::from_ymd_opt(2030, 6, 15).expect("date");

    let report = future_value_report(&client, target);
    assert!(report.starts_with("Projeção de Investimentos para 15/06/2030:\n"));
    assert!(Regex::new(r"- Ações: R\$ \d+\.\d{2}\n$").expect("regex").is_match(&report));
}

#[test]
fn future_report_without_investments_is_header_only() {
    let clock = clock_at(2025, 3, 15);
    let client = Client::new("Ana");
    let target = NaiveDate::from_ymd_opt(2025, 12, 31).expect("date");
    assert_eq!(
        future_value_report_with(&client, target, &clock, &Config::default()),
        "Projeção de Investimentos para 31/12/2025:\n"
    );
}
