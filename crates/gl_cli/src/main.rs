//! gl - Gacha League match engine CLI
//!
//! 경기 시뮬레이션 / 밸런스 배치 / 강화 / 가치 평가

use anyhow::Result;
use clap::{Parser, Subcommand};
use gl_core::{PlayStyle, PlayerStats, RankTier};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gl")]
#[command(about = "Run gacha league matches and progression rolls", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one match and print the response JSON
    Simulate {
        /// Match request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Match config file (.yaml / .yml / .json)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed (overrides the request's seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Print only the match log
        #[arg(long, default_value = "false")]
        log_only: bool,
    },

    /// Run a seeded batch of the same pairing
    Calibrate {
        /// Match request JSON file
        #[arg(long)]
        request: PathBuf,

        /// Number of matches
        #[arg(long, default_value = "1000")]
        runs: usize,

        /// First seed of the range
        #[arg(long, default_value = "0")]
        first_seed: u64,

        /// Match config file (.yaml / .yml / .json)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Roll one rank upgrade
    Upgrade {
        /// Current rank (normal, magic, rare, unique, epic)
        #[arg(long)]
        rank: RankTier,

        /// Material rank, repeatable (max 5)
        #[arg(long = "material")]
        materials: Vec<RankTier>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Appraise a player
    Value {
        #[arg(long)]
        speed: f64,
        #[arg(long)]
        accuracy: f64,
        #[arg(long)]
        power: f64,
        #[arg(long)]
        defense: f64,
        #[arg(long)]
        stamina: f64,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("gl v{}", gl_core::VERSION);

    match cli.command {
        Commands::Simulate { request, config, seed, log_only } => {
            let response = gl_cli::simulate(&request, config.as_deref(), seed)?;
            if log_only {
                for line in &response.record.result.log {
                    println!("{}", line);
                }
            } else {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }

        Commands::Calibrate { request, runs, first_seed, config } => {
            let report = gl_cli::calibrate(&request, config.as_deref(), runs, first_seed)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            eprintln!(
                "home win rate {:.1}%, shootouts {:.1}%",
                report.home_win_rate() * 100.0,
                report.shootout_rate() * 100.0
            );
        }

        Commands::Upgrade { rank, materials, seed } => {
            let response = gl_cli::upgrade(rank, materials, seed)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }

        Commands::Value { speed, accuracy, power, defense, stamina, seed } => {
            let stats =
                PlayerStats::new(speed, accuracy, power, defense, stamina, PlayStyle::Unassigned);
            let response = gl_cli::value(stats, seed)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
