use std::sync::Arc;

use clap::{Parser, Subcommand};
use hunt_coordinator::cli::{render, run_console};
use hunt_coordinator::service::GameService;
use hunt_coordinator::{HttpGameService, ServiceConfig, SessionController};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "hunt-coordinator")]
#[command(about = "Game-master console for a monster hunt session")]
struct Args {
    /// Game service base URL (overrides HUNT_SERVICE_URL)
    #[arg(long, env = "HUNT_SERVICE_URL")]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive console driving the session (default)
    Console,
    /// Print the current session once and exit
    Status,
}

#[tokio::main]
async fn main() {
    hunt_coordinator::telemetry::init_tracing();
    let args = Args::parse();

    let config = match ServiceConfig::from_env() {
        Ok(cfg) => match args.service_url {
            Some(url) => cfg.with_base_url(url),
            None => cfg,
        },
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };

    let service = match HttpGameService::new(&config.base_url, config.request_timeout) {
        Ok(service) => Arc::new(service),
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };
    info!(service_url = %config.base_url, "Using game service");

    let result = match args.command.unwrap_or(Command::Console) {
        Command::Console => {
            let controller = SessionController::new(service, config.polling);
            run_console(controller).await
        }
        Command::Status => match service.get_status().await {
            Ok(session) => {
                for line in render::session_summary(&session) {
                    println!("{line}");
                }
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    if let Err(e) = result {
        error!(code = %e.code(), error = %e, "Exiting with error");
        eprintln!("❌ {}", render::error_line(&e));
        std::process::exit(1);
    }
}
