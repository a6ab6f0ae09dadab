//! Foreman API client module
//!
//! This module provides functionality to interact with the Foreman API.

mod client;
pub mod environments;
pub mod hosts;

pub use client::ForemanClient;
pub use environments::{run_listenvs_command, Environment, EnvironmentsResponse};
pub use hosts::{generate_inventory, run_parseenv_command, Host, HostsResponse};
