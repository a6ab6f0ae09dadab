//! forinv - Foreman Ansible inventory generator
//!
//! A CLI tool that queries the Foreman API and produces Ansible inventory
//! hosts files. Hosts written to the inventory file must already be members
//! of a Foreman host group and environment.
//!
//! # Example
//!
//! ```bash
//! # List all Foreman environments and their IDs
//! forinv --action listenvs
//!
//! # Generate the inventory hosts file for environment 2
//! forinv --action parseenv --environment 2
//!
//! # Use an explicit settings file
//! forinv -a parseenv -e 2 -s /etc/foreman/settings.json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod foreman;
pub mod grouping;
pub mod inventory;
pub mod output;
pub mod settings;
pub mod ui;

pub use cli::{print_os_warning, Action, Cli};
pub use error::{ForemanError, Result};
pub use foreman::{
    generate_inventory, run_listenvs_command, run_parseenv_command, Environment, ForemanClient,
    Host,
};
pub use grouping::{group, GroupedResult};
pub use settings::Settings;
