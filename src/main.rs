//! serve-config - static JSON configuration server.
//!
//! This binary starts the HTTP server or runs the `check` report.

use clap::Parser;
use std::process::ExitCode;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use serve_config::{
    config::{CheckConfig, CheckOutputFormat, Cli, Command, ServeConfig},
    server::{create_router, serve, RouterConfig},
    store::{CheckReport, ConfigStore},
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.into_command() {
        Command::Serve(config) => run_serve(config).await,
        Command::Check(config) => run_check(config).await,
    }
}

// =============================================================================
// Serve Command
// =============================================================================

async fn run_serve(config: ServeConfig) -> ExitCode {
    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let content_root = match config.resolve_content_root() {
        Ok(root) => root,
        Err(e) => {
            error!("Failed to determine content root: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = ConfigStore::new(content_root);

    info!("Configuration:");
    info!("  Content root: {}", store.content_root().display());
    info!("  Config directory: {}", store.config_dir().display());
    if !store.config_dir().is_dir() {
        warn!("  Config directory does not exist yet; every config request will return 404");
    }

    let router = create_router(store, RouterConfig::new().with_tracing(!config.no_tracing));

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Starting serve-config on http://{}", addr);

    if let Err(e) = serve(listener, router, shutdown_signal()).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Server shutdown complete");
    ExitCode::SUCCESS
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "serve_config=debug,tower_http=debug"
    } else {
        "serve_config=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

// =============================================================================
// Check Command
// =============================================================================

async fn run_check(config: CheckConfig) -> ExitCode {
    if config.verbose {
        init_logging(true);
    }

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let content_root = match config.resolve_content_root() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("Error: failed to determine content root: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = ConfigStore::new(content_root).check().await;

    match config.format {
        CheckOutputFormat::Text => print_text_report(&report),
        CheckOutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: failed to encode report: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if report.ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_text_report(report: &CheckReport) {
    println!("serve-config Configuration Check");
    println!("═════════════════════════════════");
    println!();

    if report.config_dir_exists {
        println!("✓ Config directory: {}", report.config_dir);
    } else {
        println!("✗ Config directory: {} (missing)", report.config_dir);
    }
    println!();

    for status in &report.files {
        match (status.present, status.size, status.error.as_deref()) {
            (true, Some(size), _) => println!("✓ {} ({} bytes)", status.name, size),
            (_, _, Some(err)) => println!("✗ {} ({})", status.name, err),
            _ => println!("✗ {} (not found)", status.name),
        }
    }

    println!();
    println!("═════════════════════════════════");
    if report.ok {
        println!("✓ All checks passed!");
    } else {
        println!("✗ Some configuration files are missing");
    }
}
