use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use proximity_cli::{run_report, Cli};
use proximity_lib::TracingSink;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.input_path() {
        Some(path) => {
            let file = File::open(path).with_context(|| {
                format!("couldn't open customer list file {}", path.display())
            })?;
            run_report(&cli, BufReader::new(file), &mut output, TracingSink)?;
        }
        None => {
            let stdin = io::stdin();
            run_report(&cli, stdin.lock(), &mut output, TracingSink)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
