use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use map_core::mapgen::{MapConfig, MapGenerator};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the generation RNG; a runtime seed is mixed when absent
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of rounds (progress stages) in the map
    #[arg(long, default_value_t = MapConfig::default().num_rounds)]
    rounds: u16,

    /// Number of parallel roads per round
    #[arg(long, default_value_t = MapConfig::default().num_roads)]
    roads: u16,

    /// Acceptance probability for each eligible lateral connector
    #[arg(long, default_value_t = MapConfig::default().additional_connector_probability)]
    probability: f32,

    /// Number of maps to generate in succession (regeneration)
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Dump each generated map as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = MapConfig {
        num_rounds: args.rounds,
        num_roads: args.roads,
        additional_connector_probability: args.probability,
        ..MapConfig::default()
    };
    let generator = MapGenerator::new(config)
        .map_err(|e| anyhow::anyhow!("Invalid map configuration: {:?}", e))?;

    let base_seed = args.seed.unwrap_or_else(runtime_seed);

    for index in 0..u64::from(args.count) {
        let seed = base_seed.wrapping_add(index);
        let map = generator.generate(seed);

        if args.json {
            let dump = serde_json::to_string_pretty(&map)
                .context("Failed to serialize generated map")?;
            println!("{dump}");
        } else {
            println!("Map (seed {seed}):");
            println!(
                "  Nodes: {} ({} rounds x {} roads)",
                map.node_count(),
                map.num_rounds(),
                map.num_roads()
            );
            println!("  Connectors: {}", map.edge_count());
            println!("  Fingerprint: {}", map.fingerprint());
        }
    }

    Ok(())
}

fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17))
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
