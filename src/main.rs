//! Contact Book - Main entry point
//!
//! Loads the saved address book named by the configuration and prints each
//! contact. Interactive editing lives in front ends built on the library.

use anyhow::{Context, Result};
use contact_book::{AddressBook, Config, StorageError};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so stdout stays clean for the listing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Opening address book");

    let projections = match AddressBook::load_from_file(&config.book_path) {
        Ok(projections) => projections,
        Err(StorageError::FileNotFound(path)) => {
            warn!(path = %path.display(), "No saved address book, starting empty");
            Vec::new()
        }
        Err(e) => return Err(e).context("Failed to load address book"),
    };

    let mut book = AddressBook::new();
    let restored = book
        .restore(projections)
        .context("Saved address book contains an invalid record")?;
    info!(records = restored, "Address book ready");

    for record in &book {
        println!("{}", record);
    }

    Ok(())
}
