//! Lifespan CLI
//!
//! Usage:
//!   lifespan [ask]            Answer the questionnaire in the terminal
//!   lifespan serve [--port]   Serve the HTTP API

use std::io;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use lifespan_estimator::adapters::clock::SystemClock;
use lifespan_estimator::adapters::console::ConsoleSession;
use lifespan_estimator::adapters::http::{app_router, EstimateAppState};
use lifespan_estimator::application::EstimateLifeExpectancyHandler;
use lifespan_estimator::config::AppConfig;

#[derive(Parser)]
#[command(name = "lifespan")]
#[command(version)]
#[command(about = "Estimate remaining life expectancy from birth date and lifestyle")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer the questionnaire interactively (default)
    Ask,

    /// Serve the estimation HTTP API
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn init_tracing(config: &AppConfig, interactive: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter(interactive)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.is_production() {
        builder.json().init();
    } else {
        builder.with_target(false).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(Commands::Serve { port: Some(port) }) = &cli.command {
        config.server.port = *port;
    }
    config.validate()?;
    let interactive = !matches!(cli.command, Some(Commands::Serve { .. }));
    init_tracing(&config, interactive);

    let handler = EstimateLifeExpectancyHandler::new(Arc::new(SystemClock));

    match cli.command.unwrap_or(Commands::Ask) {
        Commands::Ask => {
            let stdin = io::stdin();
            let mut session =
                ConsoleSession::new(stdin.lock(), io::stdout(), &config.estimator.default_country);
            session.run(&handler)?;
        }
        Commands::Serve { .. } => {
            let addr = config.server.socket_addr()?;
            let state = EstimateAppState::new(handler, config.estimator.default_country.as_str());
            let app = app_router(state, &config.server.cors_origins_list());

            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Listening on {}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
