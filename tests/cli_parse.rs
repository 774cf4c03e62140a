use std::path::PathBuf;

use clap::Parser;

use stockbook::cli::{Cli, Command};

#[test]
fn no_command_runs_demo_with_defaults() {
    let cli = Cli::try_parse_from(["stockbook"]).expect("parse");
    assert_eq!(cli.command(), Command::Demo);

    let cfg = cli.config();
    assert_eq!(cfg.path, PathBuf::from("inventory.json"));
    assert_eq!(cfg.low_stock_threshold, 5);
    assert_eq!(cfg.log_filter, None);
}

#[test]
fn global_flags_override_config() {
    let cli = Cli::try_parse_from([
        "stockbook",
        "low",
        "--file",
        "/tmp/stock.json",
        "--threshold",
        "12",
        "--log-level",
        "debug",
    ])
    .expect("parse");

    assert_eq!(cli.command(), Command::Low);
    let cfg = cli.config();
    assert_eq!(cfg.path, PathBuf::from("/tmp/stock.json"));
    assert_eq!(cfg.low_stock_threshold, 12);
    assert_eq!(cfg.log_filter.as_deref(), Some("debug"));
}

#[test]
fn remove_accepts_negative_quantity() {
    let cli = Cli::try_parse_from(["stockbook", "remove", "apple", "-3"]).expect("parse");
    assert_eq!(
        cli.command(),
        Command::Remove {
            item: "apple".to_string(),
            quantity: -3,
        }
    );
}

#[test]
fn non_numeric_quantity_is_rejected() {
    assert!(Cli::try_parse_from(["stockbook", "add", "apple", "ten"]).is_err());
}
