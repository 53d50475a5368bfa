pub mod mapgen;
pub mod types;

pub use mapgen::{GeneratedMap, MapConfig, MapConfigError, MapGenerator, MapNode, generate_map};
pub use types::*;
