//! Application entry point.
//!
//! Resolves the settings record from the environment and dispatches the
//! inspection commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_config::cli::{Cli, Commands, ShowArgs};
use storefront_config::config::{AppEnv, Environment, Settings};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Snapshot the environment once, augmented by the selected env file
    let environment = Environment::load(AppEnv::from_process());

    match cli.command {
        Commands::Show(args) => show(&environment, args),
        Commands::Check => check(&environment),
    }
}

/// Print the resolved settings record as pretty JSON.
fn show(environment: &Environment, args: ShowArgs) {
    let settings = if args.with_redis_modules {
        Settings::assemble_with_redis(environment)
    } else {
        Settings::assemble(environment)
    };
    settings.log_startup_warnings();

    let printable = if args.reveal_secrets {
        settings
    } else {
        settings.redacted()
    };

    match serde_json::to_string_pretty(&printable) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("Failed to serialize settings: {}", e);
            std::process::exit(1);
        }
    }
}

/// Report missing integration credentials; non-zero exit when any are.
fn check(environment: &Environment) {
    let settings = Settings::assemble(environment);
    let missing = settings.missing_credentials();

    if missing.is_empty() {
        println!("All integration credentials are set");
        return;
    }
    for var in &missing {
        println!("missing: {}", var);
    }
    std::process::exit(1);
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
