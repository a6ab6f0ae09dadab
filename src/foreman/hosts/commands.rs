//! Inventory generation command handler

use chrono::Local;
use log::debug;
use std::path::Path;

use crate::config::inventory as inventory_config;
use crate::error::Result;
use crate::foreman::ForemanClient;
use crate::grouping::group;
use crate::inventory;
use crate::ui::{create_spinner, finish_spinner};

/// Fetch one environment's hosts, group them by host group title and write
/// the inventory file to `path` in truncate mode.
///
/// On fetch failure no file is created, not even an empty one.
pub async fn generate_inventory(
    client: &ForemanClient,
    environment_id: &str,
    path: &Path,
) -> Result<()> {
    let hosts = client.get_hosts(environment_id).await?;
    debug!("Fetched {} host records", hosts.len());

    let grouped = group(hosts.into_iter().map(|host| (host.hostgroup_title, host.name)));

    let timestamp = Local::now()
        .format(inventory_config::TIMESTAMP_FORMAT)
        .to_string();
    let contents = inventory::render(environment_id, &timestamp, &grouped);

    inventory::write(path, &contents)
}

/// Run the `parseenv` action: generate the Ansible inventory hosts file for
/// the given environment in the user's home directory.
///
/// The caller guarantees a non-empty environment ID. Fetch and write
/// failures are printed in classified form and swallowed so the run still
/// ends with exit 0.
pub async fn run_parseenv_command(
    client: &ForemanClient,
    environment_id: &str,
    hfile: &str,
    quiet: bool,
) {
    println!("Parsing Foreman environment with id: [{}]", environment_id);

    let path = match inventory::inventory_path(hfile, environment_id) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    let wait_message = "Starting hosts file generation, please wait...";
    let spinner = create_spinner(wait_message, quiet);
    if spinner.is_none() {
        // No spinner in quiet mode, but the progress line still shows
        println!("{}", wait_message);
    }
    let result = generate_inventory(client, environment_id, &path).await;
    finish_spinner(spinner);

    match result {
        Ok(()) => println!(
            "The following inventory file has been generated locally: {}",
            path.display()
        ),
        Err(e) => eprintln!("{}", e),
    }
}
