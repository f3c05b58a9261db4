use std::fs;

use finances::Config;
use tempfile::TempDir;

#[test]
fn finances_home_overrides_config_location() {
    let temp = TempDir::new().expect("create temp dir");
    std::env::set_var("FINANCES_HOME", temp.path());
    assert_eq!(Config::default_path(), temp.path().join("config.json"));

    assert_eq!(Config::from_env().expect("defaults"), Config::default());

    fs::write(
        temp.path().join("config.json"),
        r#"{ "currency_symbol": "€", "date_format": "%Y/%m/%d" }"#,
    )
    .expect("write config");
    let config = Config::from_env().expect("load config");
    assert_eq!(config.format_amount(12.5), "€ 12.50");
    assert_eq!(config.decimal_places, 2);

    std::env::remove_var("FINANCES_HOME");
}
