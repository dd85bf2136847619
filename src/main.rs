//! Ilot Planner - command-line driver
//!
//! Reads a JSON array of room descriptions, runs one generation and prints
//! the result as JSON on stdout. Logs go to stderr.
//!
//! Usage:
//!   ilot-planner --rooms floor.json --config layout.toml --objective density

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use ilot_planner::core::config::{CorridorRouter, Objective};
use ilot_planner::{GenerationConfig, GenerationPipeline, Result, RoomInput, ZoneCatalog};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ObjectiveArg {
    Density,
    Comfort,
    Efficiency,
    Balanced,
}

impl From<ObjectiveArg> for Objective {
    fn from(arg: ObjectiveArg) -> Self {
        match arg {
            ObjectiveArg::Density => Objective::Density,
            ObjectiveArg::Comfort => Objective::Comfort,
            ObjectiveArg::Efficiency => Objective::Efficiency,
            ObjectiveArg::Balanced => Objective::Balanced,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RouterArg {
    Spine,
    SpanningTree,
}

impl From<RouterArg> for CorridorRouter {
    fn from(arg: RouterArg) -> Self {
        match arg {
            RouterArg::Spine => CorridorRouter::Spine,
            RouterArg::SpanningTree => CorridorRouter::SpanningTree,
        }
    }
}

/// Place îlots in rooms and connect them with corridors
#[derive(Parser, Debug)]
#[command(name = "ilot-planner")]
#[command(about = "Place îlots in rooms and connect them with corridors")]
struct Args {
    /// JSON file with an array of rooms
    #[arg(long)]
    rooms: PathBuf,

    /// TOML or JSON file with configuration overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML file replacing the built-in zone catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Ranking objective (overrides the config file)
    #[arg(long, value_enum)]
    objective: Option<ObjectiveArg>,

    /// Corridor topology (overrides the config file)
    #[arg(long, value_enum)]
    router: Option<RouterArg>,

    /// Seed for the comfort jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ilot_planner=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GenerationConfig::load(path)?,
        None => GenerationConfig::default(),
    };
    if let Some(objective) = args.objective {
        config.optimization_objective = objective.into();
    }
    if let Some(router) = args.router {
        config.corridor_router = router.into();
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let catalog = match &args.catalog {
        Some(path) => ZoneCatalog::load_from_toml(path)?,
        None => ZoneCatalog::with_defaults(),
    };

    let content = std::fs::read_to_string(&args.rooms)?;
    let inputs: Vec<RoomInput> = serde_json::from_str(&content)?;
    tracing::info!("Loaded {} rooms from {}", inputs.len(), args.rooms.display());

    let pipeline = GenerationPipeline::try_new(catalog, config)?;
    let result = pipeline.generate_from_inputs(&inputs);
    if !result.status.is_success() {
        tracing::warn!("{}", result.message);
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}
