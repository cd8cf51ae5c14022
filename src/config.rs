//! Configuration management for serve-config.
//!
//! Options come from command-line arguments via clap, with every option also
//! readable from an environment variable carrying the `SERVE_CONFIG_` prefix.
//!
//! # Environment Variables
//!
//! - `SERVE_CONFIG_HOST` - Server bind address (default: 0.0.0.0)
//! - `SERVE_CONFIG_PORT` - Server port (default: 5000)
//! - `SERVE_CONFIG_CONTENT_ROOT` - Directory containing `config_files/`
//!   (default: current working directory)

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

// =============================================================================
// CLI Arguments
// =============================================================================

/// serve-config - static JSON configuration server.
///
/// Serves cooker_config.json, eiot_config.json and pico_iot_config.json from
/// `<content-root>/config_files`, plus a `/ping` liveness endpoint.
#[derive(Parser, Debug, Clone)]
#[command(name = "serve-config")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Server options used when no subcommand is given.
    #[command(flatten)]
    pub serve: ServeConfig,
}

impl Cli {
    /// Resolve the command to run, defaulting to `serve`.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run the HTTP server (default).
    Serve(ServeConfig),

    /// Report which configuration files are present and exit.
    Check(CheckConfig),
}

// =============================================================================
// Serve Configuration
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct ServeConfig {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "SERVE_CONFIG_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "SERVE_CONFIG_PORT")]
    pub port: u16,

    /// Base directory containing the `config_files` folder.
    ///
    /// Defaults to the current working directory.
    #[arg(long, env = "SERVE_CONFIG_CONTENT_ROOT")]
    pub content_root: Option<PathBuf>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl ServeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("host must not be empty. Set --host or SERVE_CONFIG_HOST".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        validate_content_root(self.content_root.as_ref())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The content root, falling back to the current working directory.
    pub fn resolve_content_root(&self) -> std::io::Result<PathBuf> {
        resolve_content_root(self.content_root.as_ref())
    }
}

// =============================================================================
// Check Configuration
// =============================================================================

/// Output format for the `check` subcommand.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckOutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Machine-readable JSON report
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct CheckConfig {
    /// Base directory containing the `config_files` folder.
    #[arg(long, env = "SERVE_CONFIG_CONTENT_ROOT")]
    pub content_root: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = CheckOutputFormat::Text)]
    pub format: CheckOutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl CheckConfig {
    pub fn validate(&self) -> Result<(), String> {
        validate_content_root(self.content_root.as_ref())
    }

    pub fn resolve_content_root(&self) -> std::io::Result<PathBuf> {
        resolve_content_root(self.content_root.as_ref())
    }
}

fn validate_content_root(content_root: Option<&PathBuf>) -> Result<(), String> {
    match content_root {
        Some(root) if !root.is_dir() => Err(format!(
            "content root {} is not a directory",
            root.display()
        )),
        _ => Ok(()),
    }
}

fn resolve_content_root(content_root: Option<&PathBuf>) -> std::io::Result<PathBuf> {
    match content_root {
        Some(root) => Ok(root.clone()),
        None => std::env::current_dir(),
    }
}

// =============================================================================
// Tests
// =============================================================================
