//! Teller CLI
//!
//! An interactive single-user banking session persisted to a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- [accounts.json]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::io;
use std::process;
use teller::{JsonFileStore, Result, Session};

/// Accounts file used when no path argument is given.
const DEFAULT_ACCOUNTS_FILE: &str = "accounts.json";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ACCOUNTS_FILE.to_string());

    let store = JsonFileStore::new(path);
    let mut session = Session::open(store)?;

    let stdin = io::stdin();
    let input = stdin.lock();
    session.run(input, io::stdout())?;

    Ok(())
}
