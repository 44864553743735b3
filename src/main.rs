//! OSRS Hiscores - command line lookup
//!
//! Fetches one player and prints their skills and activities, either as a
//! plain listing or as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use osrs_hiscores::{
    ClientConfig, FetchOptions, HiscoresClient, HiscoresError, Player, ResponseFormat, Result,
};

/// Look up a player on the Old School RuneScape hiscores
#[derive(Parser, Debug)]
#[command(name = "osrs-hiscores")]
#[command(about = "Fetch a player's skills and activities from the OSRS hiscores")]
struct Args {
    /// Player name; several words are joined with single spaces
    #[arg(required = true)]
    rsn: Vec<String>,

    /// Show virtual levels above 99
    #[arg(long = "virtual")]
    virtual_levels: bool,

    /// Response form to request (structured or positional)
    #[arg(long)]
    format: Option<ResponseFormat>,

    /// How to print the player
    #[arg(long, value_enum, default_value_t = Output::Text)]
    output: Output,

    /// TOML file with client settings
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("osrs_hiscores=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => ClientConfig::load_from_toml(path)?,
        None => ClientConfig::default(),
    };
    let mut config = config.with_env_overrides()?;
    if let Some(format) = args.format {
        config.format = format;
    }

    let rsn = args.rsn.join(" ");
    let options = FetchOptions::new().with_virtual_levels(args.virtual_levels);

    tracing::info!(%rsn, format = %config.format, "Fetching player");

    let client = HiscoresClient::from_config(config)?;
    let rt = Runtime::new()?;
    let player = rt.block_on(client.get_player_by_rsn_with(&rsn, &options))?;

    match args.output {
        Output::Text => display_player(&player, args.virtual_levels),
        Output::Json => println!("{}", serde_json::to_string_pretty(&player)?),
    }

    Ok(())
}

fn report_error(err: &HiscoresError) {
    eprintln!("Error fetching player data: {}", err);
    match err.status() {
        Some(404) => eprintln!("Player not found"),
        Some(503) => eprintln!("Hiscores are currently unavailable"),
        _ => {}
    }
}

fn display_player(player: &Player, virtual_levels: bool) {
    println!("Player: {}", player.rsn());
    println!(
        "Level Type: {}",
        if virtual_levels { "Virtual" } else { "Regular" }
    );

    println!("\nSkills:");
    for skill in player.skills() {
        println!(
            "{}: Level {} (Rank {}, XP {})",
            skill.name, skill.level, skill.rank, skill.xp
        );
    }

    println!("\nActivities:");
    for activity in player.activities() {
        println!(
            "{}: Score {} (Rank {})",
            activity.name, activity.score, activity.rank
        );
    }
}
