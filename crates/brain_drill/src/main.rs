//! Brain Drill CLI
//!
//! 헤드리스 드릴: 팀당 역할별 1명씩, 스크립트된 공 궤적으로
//! 컨트롤러를 매 틱 학습시키고 액션 분포와 리셋 횟수를 출력.

mod drill;

use anyhow::{Context, Result};
use clap::Parser;
use of_brain::config::BrainConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use drill::{run_drill, DrillOptions};

#[derive(Parser)]
#[command(name = "brain_drill")]
#[command(about = "Drive per-player controllers through a scripted drill", long_about = None)]
struct Cli {
    /// Number of simulation ticks
    #[arg(long, default_value_t = 200)]
    ticks: u32,

    /// Network initialization seed (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (.yaml/.yml or .json); defaults to OF_BRAIN_PROFILE preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Mark every Nth tick as a scoring event (0 = never)
    #[arg(long, default_value_t = 50)]
    score_every: u32,

    /// Print the summary as JSON
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => BrainConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => BrainConfig::from_env_or_default(),
    };
    if let Some(seed) = cli.seed {
        config.network.seed = seed;
    }

    let summary = run_drill(config, &DrillOptions { ticks: cli.ticks, score_every: cli.score_every });

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("🏟️  Drill finished: {} ticks ({} scoring)", summary.ticks, summary.scoring_ticks);
    println!("   Resets: {}  Introspection failures: {}", summary.resets, summary.introspection_failures);
    println!();
    println!("{:<4} {:<5} {:<11} {:>6} {:>6} {:>9} {:>6}   final", "id", "team", "role", "shoot", "pass", "intercept", "move");
    for p in &summary.players {
        println!(
            "{:<4} {:<5} {:<11} {:>6} {:>6} {:>9} {:>6}   ({:.0}, {:.0})",
            p.id,
            p.team.as_str(),
            p.role.as_str(),
            p.actions.shoot,
            p.actions.pass,
            p.actions.intercept,
            p.actions.movement,
            p.final_position.x,
            p.final_position.y,
        );
    }

    Ok(())
}
