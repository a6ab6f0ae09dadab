//! Environment listing command handler

use log::debug;

use crate::foreman::ForemanClient;
use crate::grouping::group;
use crate::output::output_environments;

/// Run the `listenvs` action: fetch all environments, group IDs by name and
/// render the console table.
///
/// Fetch errors are printed in classified form and swallowed: the run ends
/// cleanly so the process still exits 0. This favors operator visibility
/// over strict failure signaling.
pub async fn run_listenvs_command(client: &ForemanClient) {
    debug!("Fetching environments");

    match client.get_environments().await {
        Ok(environments) => {
            debug!("Fetched {} environment records", environments.len());
            let grouped = group(environments.into_iter().map(|env| (env.name, env.id)));
            output_environments(&grouped);
        }
        Err(e) => eprintln!("{}", e),
    }
}
