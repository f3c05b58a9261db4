use chrono::Months;
use finances::{
    init,
    report::{future_value_report_with, generate_report_with},
    Client, Clock, Config, Investment, LedgerError, SystemClock,
};

fn run() -> Result<(), LedgerError> {
    let config = Config::from_env()?;
    let clock = SystemClock;

    let mut client = Client::new("Ana Beatriz");
    let account = client.add_account("Conta Corrente");
    account.add_transaction(1000.0, "Depósito", "Salário");
    account.add_transaction(-200.0, "Saída", "Compras");
    client.add_investment(Investment::new("Ações", 5000.0, 0.05));

    println!("{}", generate_report_with(&client, &clock, &config));

    let today = clock.today();
    let target = today.checked_add_months(Months::new(12)).unwrap_or(today);
    println!(
        "{}",
        future_value_report_with(&client, target, &clock, &config)
    );
    Ok(())
}

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
