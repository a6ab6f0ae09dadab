//! CLI argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::defaults;

/// Foreman Ansible inventory CLI
#[derive(Parser, Debug)]
#[command(name = "forinv")]
#[command(version)]
#[command(
    about = "Parse Foreman API environments and generate Ansible inventory hosts files",
    long_about = None
)]
pub struct Cli {
    /// Action: "listenvs" lists all Foreman environments, "parseenv"
    /// generates an Ansible inventory file for the supplied environment ID
    #[arg(short, long, value_enum, default_value_t = Action::Listenvs)]
    pub action: Action,

    /// Foreman environment ID to parse. Example: 1
    #[arg(short, long)]
    pub environment: Option<String>,

    /// Settings file path (overrides FOREMAN_SETTINGS_PATH and the default)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Suppress the progress spinner
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

/// Available actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Action {
    /// List all Foreman environments and their IDs
    Listenvs,
    /// Generate the inventory hosts file for one environment
    Parseenv,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Listenvs => write!(f, "listenvs"),
            Action::Parseenv => write!(f, "parseenv"),
        }
    }
}

impl Cli {
    /// Environment ID for `parseenv`, rejecting absent or empty values.
    ///
    /// This is the usage-error boundary: the core components are never
    /// invoked, and no request is issued, without a valid ID.
    pub fn require_environment(&self) -> Result<&str, String> {
        match self.environment.as_deref() {
            Some(id) if !id.trim().is_empty() => Ok(id),
            _ => Err(
                "Please provide a valid Foreman environment ID. You can list all \
                 environments using the <-a listenvs | --action listenvs> option, \
                 or access help using <-h | --help>."
                    .to_string(),
            ),
        }
    }
}

/// Warn when the local OS is unsupported for direct Ansible inventory use.
///
/// Pre-flight check owned by the CLI layer; it has no effect on the core
/// pipeline.
pub fn print_os_warning() {
    const SUPPORTED_PLATFORMS: &[&str] = &["linux", "macos"];
    let os_family = std::env::consts::OS;

    if !SUPPORTED_PLATFORMS.contains(&os_family) {
        println!(
            "Warning: Running on {} OS. Transfer the generated inventory file \
             to a system that supports Ansible.",
            os_family.to_uppercase()
        );
    }
}
