use clap::Parser;
use sitesage_cli::config::config_manager::ConfigManager;
use sitesage_cli::enums::commands::Commands;
use sitesage_cli::errors::ErrorHandler;
use sitesage_cli::structs::cli::Cli;
use sitesage_cli::structs::config::config::Config;
use sitesage_cli::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = match &cli.command {
        // init must work even when the existing file is broken
        Commands::Init => Config::default(),
        _ => match ConfigManager::load() {
            Ok(config) => config,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                std::process::exit(1);
            }
        },
    };

    let mut runner = CommandRunner::new(config);
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
