use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pwd_check::{
    load_common_passwords, run_shell, CommonPasswords, DEFAULT_DICTIONARY_PATH,
    DICTIONARY_PATH_ENV,
};

/// Interactive password strength checker
#[derive(Parser, Debug)]
#[command(name = "pwd-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Newline-delimited list of common passwords
    #[arg(short, long, env = DICTIONARY_PATH_ENV, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Verbose logging (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the dictionary, degrading every failure to an empty set.
fn load_dictionary(cli: &Cli) -> CommonPasswords {
    match load_common_passwords(&cli.dictionary) {
        Ok(load) => {
            if let Some(warning) = load.warning() {
                println!("{}", warning);
            }
            load.passwords
        }
        Err(e) => {
            warn!("{}", e);
            println!(
                "Warning: '{}' could not be read. Dictionary check will be skipped.",
                cli.dictionary.display()
            );
            CommonPasswords::empty()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    info!("Using dictionary {}", cli.dictionary.display());
    let common = load_dictionary(&cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_shell(stdin.lock(), stdout.lock(), &common).context("Interactive session failed")?;

    Ok(())
}
