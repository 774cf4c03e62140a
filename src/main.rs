//! stockbook CLI.

use std::path::Path;

use clap::Parser;
use stockbook::{
    cli::{Cli, Command},
    config::StoreConfig,
    core::store::InventoryStore,
    telemetry,
    types::Quantity,
};
use tracing::debug;

fn main() {
    let cli = Cli::parse();
    let cfg = cli.config();
    telemetry::init(cfg.log_filter.as_deref());

    if let Err(e) = run(cli.command(), &cfg) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: Command, cfg: &StoreConfig) -> anyhow::Result<()> {
    match command {
        Command::Demo => demo(cfg),
        Command::Add { item, quantity } => {
            let mut store = open(&cfg.path)?;
            let mut logs = Vec::new();
            store.add(&item, quantity, Some(&mut logs));
            for entry in &logs {
                println!("{entry}");
            }
            store.save_to(&cfg.path)?;
            Ok(())
        }
        Command::Remove { item, quantity } => {
            let mut store = open(&cfg.path)?;
            if try_remove(&mut store, &item, quantity) {
                store.save_to(&cfg.path)?;
            }
            Ok(())
        }
        Command::Qty { item } => {
            let store = open(&cfg.path)?;
            println!("{}", store.get_quantity(&item));
            Ok(())
        }
        Command::Low => {
            let store = open(&cfg.path)?;
            for item in store.check_low_items(cfg.low_stock_threshold) {
                println!("{item}");
            }
            Ok(())
        }
        Command::Report => {
            let store = open(&cfg.path)?;
            store.report()?;
            Ok(())
        }
    }
}

fn demo(cfg: &StoreConfig) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    let mut logs = Vec::new();

    store.add("apple", 10, Some(&mut logs));
    store.add("banana", 5, Some(&mut logs));
    // Rejected: empty name and negative quantity.
    store.add("", -10, Some(&mut logs));

    try_remove(&mut store, "apple", 3);
    try_remove(&mut store, "orange", 1);

    println!("Apple stock: {}", store.get_quantity("apple"));
    println!(
        "Low items: {:?}",
        store.check_low_items(cfg.low_stock_threshold)
    );

    store.save_to(&cfg.path)?;
    load_or_empty(&mut store, &cfg.path)?;
    store.report()?;
    println!("Diagnostic message printed safely");

    for entry in &logs {
        debug!(%entry, "mutation log");
    }
    Ok(())
}

fn open(path: &Path) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    load_or_empty(&mut store, path)?;
    Ok(store)
}

fn load_or_empty(store: &mut InventoryStore, path: &Path) -> anyhow::Result<()> {
    match store.load_from(path) {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            println!("{e}. Starting with empty inventory.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn try_remove(store: &mut InventoryStore, item: &str, quantity: Quantity) -> bool {
    match store.remove(item, quantity) {
        Ok(()) => true,
        Err(e) => {
            println!("Error removing item: {e}");
            false
        }
    }
}
