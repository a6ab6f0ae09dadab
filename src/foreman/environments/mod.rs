//! Environment module

mod api;
mod commands;
mod models;

pub use commands::run_listenvs_command;
pub use models::{Environment, EnvironmentsResponse};
