//! Procedural run-map graph generation split into coherent submodules.

pub mod config;
pub mod model;

mod connectors;
mod generator;
mod grid;
mod sample;
mod shuffle;

pub use config::{MapConfig, MapConfigError};
pub use generator::MapGenerator;
pub use model::{GeneratedMap, MapNode};

pub fn generate_map(config: MapConfig, seed: u64) -> Result<GeneratedMap, MapConfigError> {
    Ok(MapGenerator::new(config)?.generate(seed))
}
