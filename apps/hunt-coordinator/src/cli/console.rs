use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::cli::render;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::session::SessionController;

/// One console line, parsed without a binary name.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
struct ConsoleLine {
    #[command(subcommand)]
    command: ConsoleCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Choose the number of players and alliances
    Setup { players: usize, alliances: usize },
    /// Put player N into alliance M (both 1-based)
    Assign { player: usize, alliance: usize },
    /// Create the session from the current assignment
    Create,
    /// Confirm alliance N's new VP values, one per member
    Redistribute {
        alliance: usize,
        #[arg(required = true, allow_negative_numbers = true)]
        vps: Vec<i64>,
    },
    /// Start the round once every alliance has confirmed
    StartRound,
    /// Submit a move: player, battlefield position, weapon name
    Move {
        player: String,
        position: u32,
        #[arg(required = true, num_args = 1..)]
        weapon: Vec<String>,
    },
    /// Resolve the round once every player has moved
    Resolve,
    /// Go back to VP redistribution after a resolved round
    NextRound,
    /// List a player's weapons
    Weapons { player: String },
    /// Show what a player sees
    Prompt { player: String },
    /// Show the session
    Status,
    /// Show the session kill history
    Kills,
    /// Fetch the session now
    Refresh,
    /// Reset the session on the service
    Reset,
    /// Leave the console
    #[command(alias = "exit")]
    Quit,
}

/// Parse one input line into a console command.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, clap::Error> {
    ConsoleLine::try_parse_from(line.split_whitespace()).map(|l| l.command)
}

fn one_based(n: usize, what: &str) -> Result<usize, DomainError> {
    n.checked_sub(1).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidAssignment,
            format!("{what} numbers start at 1"),
        )
    })
}

fn no_alliance(alliance: usize) -> DomainError {
    DomainError::not_found(NotFoundKind::Alliance, format!("no alliance #{alliance}"))
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Run one command against the controller. Returns `false` when the console should exit.
pub async fn execute(
    controller: &mut SessionController,
    command: ConsoleCommand,
) -> Result<bool, AppError> {
    debug!(command = ?command, "Console command");
    match command {
        ConsoleCommand::Setup { players, alliances } => {
            controller.configure(players, alliances)?;
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::Assign { player, alliance } => {
            controller.assign(one_based(player, "player")?, one_based(alliance, "alliance")?)?;
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::Create => {
            controller.confirm_assignment().await?;
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::Redistribute { alliance, vps } => {
            let name = alliance
                .checked_sub(1)
                .and_then(|idx| controller.snapshot()?.alliances.get(idx))
                .map(|a| a.name.clone())
                .ok_or_else(|| no_alliance(alliance))?;
            let mut proposal = controller
                .vp_proposal(&name)
                .ok_or_else(|| no_alliance(alliance))?;
            proposal.set_all(vps);
            if let Some(problem) = proposal.problem() {
                return Err(problem.into());
            }
            let progress = controller
                .confirm_redistribution(&name, proposal.proposed())
                .await?;
            println!(
                "{name} confirmed ({}/{} alliances done)",
                progress.done, progress.total
            );
        }
        ConsoleCommand::StartRound => {
            controller.start_round().await?;
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::Move {
            player,
            position,
            weapon,
        } => {
            let weapon = weapon.join(" ");
            controller.submit_move(&player, position, &weapon).await?;
            println!("{player} attacks position {position} with {weapon}");
        }
        ConsoleCommand::Resolve => {
            let lines = controller.resolve_round().await?;
            if lines.is_empty() {
                println!("No kills this round");
            }
            print_lines(lines);
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::NextRound => {
            controller.start_next_round()?;
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::Weapons { player } => {
            let weapons = controller.player_weapons(&player).await?;
            println!("{}", render::weapons_line(&player, &weapons));
        }
        ConsoleCommand::Prompt { player } => {
            let prompt = controller.player_prompt(&player);
            println!("{}", render::prompt_line(&player, &prompt));
        }
        ConsoleCommand::Status => print_lines(render::controller_summary(controller)),
        ConsoleCommand::Kills => {
            let lines = controller.kill_history_log();
            if lines.is_empty() {
                println!("No kills yet");
            }
            print_lines(lines);
        }
        ConsoleCommand::Refresh => {
            controller.refresh().await?;
            print_lines(render::controller_summary(controller));
        }
        ConsoleCommand::Reset => {
            controller.reset().await?;
            println!("Session reset");
        }
        ConsoleCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Drive the controller from stdin until `quit` or end of input, applying poller updates as they arrive.
pub async fn run_console(mut controller: SessionController) -> Result<(), AppError> {
    let phase = controller.connect().await;
    println!("Connected; phase {phase}. Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = line.map_err(|e| AppError::internal(format!("stdin: {e}")))?;
                let Some(line) = line else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match parse_line(&line) {
                    Ok(command) => match execute(&mut controller, command).await {
                        Ok(true) => {}
                        Ok(false) => break,
                        Err(e) => println!("{}", render::error_line(&e)),
                    },
                    Err(e) => println!("{e}"),
                }
            }
            effect = controller.next_update() => {
                print_lines(render::update_lines(&effect));
            }
        }
    }
    info!("Console closed");
    Ok(())
}
