use anyhow::Result;
use clap::Parser;
use resume_scanner::app_log;
use resume_scanner::cli::{run_scan, Cli, Command};
use resume_scanner::interactive::run_interactive;
use resume_scanner::logging::init_logging;
use resume_scanner::{ConfigManager, ServiceClient};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging first
    init_logging(cli.log_file.as_deref())?;

    let config = ConfigManager::load(&cli.overrides())?;
    app_log!(info, "Environment: {}", config.environment);
    app_log!(info, "Backend: {}", config.service.backend_url);

    let client = ServiceClient::new(config.service.backend_url.clone(), config.timeout())?;

    let succeeded = match cli.command {
        Command::Scan(args) => run_scan(args, &client).await?,
        Command::Interactive => run_interactive(&client).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
