//! Plain-text reports built from a client snapshot.

use chrono::NaiveDate;

use crate::config::Config;
use crate::ledger::{Client, InvestmentStatus, TransactionFilter};
use crate::projection;
use crate::time::{Clock, SystemClock};

/// Renders accounts, their full history, investments and net worth using the system clock.
pub fn generate_report(client: &Client) -> String {
    generate_report_with(client, &SystemClock, &Config::default())
}

pub fn generate_report_with(client: &Client, clock: &dyn Clock, config: &Config) -> String {
    let now = clock.now();
    let mut report = format!("Relatório Financeiro para {}\n", client.name);

    report.push_str("Contas:\n");
    for account in &client.accounts {
        report.push_str(&format!(
            "- {}: {}\n",
            account.name,
            config.format_amount(account.balance())
        ));
        report.push_str("  Transações:\n");
        for transaction in account.get_transactions(&TransactionFilter::new()) {
            report.push_str(&format!("    {}\n", transaction.render(config)));
        }
    }

    report.push_str("Investimentos:\n");
    for investment in &client.investments {
        let line = match investment.status() {
            InvestmentStatus::Active => format!(
                "- {}: {}\n",
                investment.kind(),
                config.format_amount(investment.value_at(now))
            ),
            InvestmentStatus::Sold { proceeds, .. } => format!(
                "- {}: vendido por {}\n",
                investment.kind(),
                config.format_amount(proceeds)
            ),
        };
        report.push_str(&line);
    }

    report.push_str(&format!(
        "Patrimônio Total: {}\n",
        config.format_amount(client.net_worth_with_clock(clock))
    ));
    report
}

/// Projects each active investment to `date`, compounding from its initial amount.
pub fn future_value_report(client: &Client, date: NaiveDate) -> String {
    future_value_report_with(client, date, &SystemClock, &Config::default())
}

pub fn future_value_report_with(
    client: &Client,
    date: NaiveDate,
    clock: &dyn Clock,
    config: &Config,
) -> String {
    let projection = projection::project(client, date, clock);
    let mut report = format!(
        "Projeção de Investimentos para {}:\n",
        config.format_date(projection.target)
    );
    for item in &projection.values {
        report.push_str(&format!(
            "- {}: {}\n",
            item.kind,
            config.format_amount(item.value)
        ));
    }
    report
}
