//! Host module

mod api;
mod commands;
mod models;

pub use commands::{generate_inventory, run_parseenv_command};
pub use models::{Host, HostsResponse};
