use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use reelseed_api::RestClient;
use reelseed_core::error::report;
use reelseed_core::{render, seeder, Catalog, SeedError, Settings};
use tracing_subscriber::EnvFilter;

/// Seed the movies and series tables of a Supabase project.
#[derive(Debug, Parser)]
#[command(name = "reelseed", version, about)]
struct Cli {
    /// Print the payloads instead of sending them
    #[arg(long)]
    dry_run: bool,

    /// Catalog fixture to seed instead of the bundled sample (.toml or .json)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(
        long,
        value_name = "SECS",
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let result = run_with(&cli, |name| std::env::var(name).ok(), &mut io::stdout()).await;
    exit_code(result)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "reelseed=debug" } else { "reelseed=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout is reserved for dry-run payloads.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn exit_code(result: Result<(), SeedError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %report(&e), "seeding aborted");
            ExitCode::FAILURE
        }
    }
}

/// Resolve settings through `lookup`, load the catalog, then either print the
/// payloads to `out` or push them to the store.
async fn run_with<F, W>(cli: &Cli, lookup: F, out: &mut W) -> Result<(), SeedError>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let settings = Settings::resolve(lookup)?;
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };

    if cli.dry_run {
        render::render_dry_run(out, &catalog)?;
        return Ok(());
    }

    let client = RestClient::new(
        &settings.url,
        settings.api_key.as_str(),
        Duration::from_secs(cli.timeout),
    )
    .map_err(|e| SeedError::Config(format!("cannot use {}: {e}", settings.url)))?;

    let outcomes = seeder::seed(&client, &catalog).await?;
    let rows: usize = outcomes.iter().map(|o| o.rows).sum();
    tracing::info!(tables = outcomes.len(), rows, "seeding complete");
    Ok(())
}
