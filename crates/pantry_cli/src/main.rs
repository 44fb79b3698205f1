//! Catalog maintenance CLI entry point.
//!
//! # Responsibility
//! - Parse maintenance flags and run them in a fixed order:
//!   wipe, then seed, then print.
//! - Own the database connection for the duration of one invocation.

use clap::Parser;
use log::info;
use pantry_core::{
    default_log_level, init_logging, CatalogService, SqliteProductRepository,
};
use std::error::Error;

const PRODUCTS_DB_FILE: &str = "products.db";

#[derive(Parser, Debug)]
#[command(name = "pantry", about = "Manage the local product catalog")]
struct Cli {
    /// Delete all product rows before any seeding.
    #[arg(short = 'd', long = "delete_all_data")]
    delete_all_data: bool,
    /// Insert the default product rows.
    #[arg(short = 'a', long = "add_default_data")]
    add_default_data: bool,
    /// Print all product rows.
    #[arg(short = 'p', long = "print_all_data")]
    print_all_data: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => (),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_logging(default_log_level())?;

    // The connection stays open until the end of this scope, so printing
    // happens inside the connection lifetime.
    let conn = pantry_core::open_db(PRODUCTS_DB_FILE)?;
    let service = CatalogService::new(SqliteProductRepository::new(&conn));

    if cli.delete_all_data {
        let deleted = service.delete_all_products()?;
        info!("event=cli_wipe module=cli status=ok deleted={deleted}");
    }

    if cli.add_default_data {
        let created = service.seed_defaults()?;
        info!("event=cli_seed module=cli status=ok inserted={}", created.len());
    }

    if cli.print_all_data {
        for product in service.list_products()? {
            println!("{product}");
        }
    }

    Ok(())
}
