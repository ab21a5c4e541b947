//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers which delegate to `AppCore`.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use aigw_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers};
use aigw_core::AiPlatformInput;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Logs go to stderr so answers and listings stay pipeable.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);

    match cli.command {
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
        Some(Commands::Serve {
            port,
            allowed_origins,
        }) => {
            handlers::serve::execute(
                &config.database_url,
                config.upstream_timeout,
                port,
                allowed_origins,
            )
            .await
        }
        Some(command) => dispatch(&config, command).await,
    }
}

async fn dispatch(config: &CliConfig, command: Commands) -> anyhow::Result<()> {
    let ctx = bootstrap(config).await?;
    tracing::debug!(database_url = %config.database_url, "CLI context ready");

    match command {
        Commands::List {
            page_size,
            page_token,
            all,
        } => handlers::list::execute(&ctx, page_size, page_token, all).await,
        Commands::Add {
            platform_type,
            url,
            access_key,
            name,
            model,
            description,
        } => {
            let input = AiPlatformInput::new(platform_type, url, access_key, name, model)
                .with_description(description);
            handlers::add::execute(&ctx, input).await
        }
        Commands::Remove { reference } => handlers::remove::execute(&ctx, &reference).await,
        Commands::Ask { reference, prompt } => {
            handlers::ask::execute(&ctx, &reference, &prompt.join(" ")).await
        }
        // Handled in `run` before any context is built
        Commands::Serve { .. } => Ok(()),
    }
}
