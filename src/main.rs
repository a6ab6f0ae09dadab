//! forinv - Main entry point

use clap::Parser;
use log::{debug, info};

use forinv::{
    print_os_warning, run_listenvs_command, run_parseenv_command, Action, Cli, ForemanClient,
    Settings,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting forinv v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: action={}, environment={:?}, quiet={}",
        cli.action, cli.environment, cli.quiet
    );

    // Usage errors are rejected at the boundary, before settings are loaded
    // and before any request could be issued
    let environment = match cli.action {
        Action::Parseenv => match cli.require_environment() {
            Ok(id) => Some(id.to_string()),
            Err(msg) => return Err(msg.into()),
        },
        Action::Listenvs => None,
    };

    let settings = Settings::load(cli.settings.as_deref())?;
    let client = ForemanClient::new(&settings);

    match (cli.action, environment) {
        (Action::Listenvs, _) => run_listenvs_command(&client).await,
        (Action::Parseenv, Some(environment)) => {
            print_os_warning();
            run_parseenv_command(&client, &environment, &settings.hfile, cli.quiet).await;
        }
        // Unreachable: parseenv without an ID returned above
        (Action::Parseenv, None) => {}
    }

    info!("Completed");
    Ok(())
}
