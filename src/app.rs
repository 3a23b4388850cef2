// Declare modules
pub mod cli;
pub mod config;
pub mod journal;
pub mod models;
pub mod registry;
pub mod runner;
pub mod species;

use anyhow::Result;
use clap::Parser;
use std::io;

use self::cli::Cli;
use self::config::resolve_config;
use self::journal::ErrorJournal;
use self::registry::Registry;
use self::runner::{read_species_key, Runner};

/// Initializes components and orchestrates one pass.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let args = Cli::parse();

    // 2. Resolve Configuration
    let config = resolve_config(&args)?;

    // 3. Build the fixed lookup table
    let registry = Registry::builtin();
    let journal = ErrorJournal::new(config.log_file);
    log::debug!("Failed behaviors go to {:?}", journal.path());
    let mut runner = Runner::new(io::stdout().lock(), &journal);

    // 4. Read the species key
    if config.prompt {
        runner.prompt()?;
    }
    let key = read_species_key(&mut io::stdin().lock())?;
    let handle = registry.lookup(&key);
    log::debug!("Selected {:?} for input {:?}", handle, key);

    // 5. Invoke behaviors and print
    runner.run(handle)
}
